//! Widget refresh background task

use std::{sync::Arc, time::Duration};

use tokio::time::interval;
use tracing::{debug, info, warn};

use crate::state::AppState;

/// Background task that periodically re-evaluates the widget display.
///
/// This plays the role of the platform refresh trigger: the resolver never
/// wakes itself, something has to keep asking it what the display should be
/// now that a minute has passed or the store was rewritten. The first tick
/// fires immediately, so the display is populated as soon as the task runs.
pub async fn widget_refresh_task(state: Arc<AppState>) {
    info!(
        "Starting widget refresh task (every {}s)",
        state.refresh_interval_secs
    );

    let mut interval = interval(Duration::from_secs(state.refresh_interval_secs.max(1)));

    loop {
        interval.tick().await;

        match state.refresh() {
            Ok(display_state) => {
                debug!("Widget refreshed: {:?}", display_state);
            }
            Err(e) => {
                warn!("Widget refresh failed: {}", e);
            }
        }
    }
}
