//! Main widget host state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use chrono::{DateTime, Local};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::store::GoalStore;
use crate::widget::resolve;

use super::DisplayState;

/// State shared between the refresh driver and the render loop.
///
/// The resolver itself is pure; this struct owns the host-side plumbing
/// around it: the store port, the last evaluated display state, and the
/// channel that fans display changes out to whoever is drawing them.
pub struct AppState {
    /// Read-only port onto the shared preference store
    pub store: Box<dyn GoalStore>,
    /// Timeline horizon handed to schedule builders
    pub horizon_minutes: u32,
    /// Seconds between refresh evaluations in watch mode
    pub refresh_interval_secs: u64,
    /// Host start time, for uptime reporting
    pub start_time: Instant,
    /// Display state produced by the most recent refresh
    pub display_state: Arc<Mutex<DisplayState>>,
    /// Instant of the most recent refresh
    pub last_refresh: Arc<Mutex<Option<DateTime<Local>>>>,
    /// Channel for display updates
    pub display_update_tx: watch::Sender<DisplayState>,
    /// Keep the receiver alive to prevent channel closure
    pub _display_update_rx: watch::Receiver<DisplayState>,
}

impl AppState {
    /// Create a new AppState around a goal store
    pub fn new(store: Box<dyn GoalStore>, horizon_minutes: u32, refresh_interval_secs: u64) -> Self {
        let (display_update_tx, display_update_rx) = watch::channel(DisplayState::Empty);

        Self {
            store,
            horizon_minutes,
            refresh_interval_secs,
            start_time: Instant::now(),
            display_state: Arc::new(Mutex::new(DisplayState::Empty)),
            last_refresh: Arc::new(Mutex::new(None)),
            display_update_tx,
            _display_update_rx: display_update_rx,
        }
    }

    /// Re-evaluate the widget display: snapshot the store, resolve it
    /// against the current local time, and publish the result if it changed
    pub fn refresh(&self) -> Result<DisplayState, String> {
        let record = self.store.snapshot();
        let now = Local::now();
        let next = resolve(&record, &now);

        let mut display = self
            .display_state
            .lock()
            .map_err(|e| format!("Failed to lock display state: {}", e))?;

        let changed = *display != next;
        let previous = std::mem::replace(&mut *display, next.clone());
        drop(display); // Release the lock early

        if let Ok(mut last) = self.last_refresh.lock() {
            *last = Some(now);
        }

        if changed {
            match (&previous, &next) {
                (DisplayState::Empty, DisplayState::Active { goal_name, .. }) => {
                    info!("Goal \"{}\" is now showing", goal_name);
                }
                (DisplayState::Active { goal_name, .. }, DisplayState::Empty) => {
                    info!("Goal \"{}\" left the display", goal_name);
                }
                _ => debug!("Display updated: {:?}", next),
            }

            // Notify display watchers
            if let Err(e) = self.display_update_tx.send(next.clone()) {
                warn!("Failed to send display update: {}", e);
            }
        } else {
            debug!("Display unchanged: {:?}", next);
        }

        Ok(next)
    }

    /// Get the display state from the most recent refresh
    pub fn current_display(&self) -> Result<DisplayState, String> {
        self.display_state
            .lock()
            .map(|display| display.clone())
            .map_err(|e| format!("Failed to lock display state: {}", e))
    }

    /// Get the instant of the most recent refresh
    pub fn last_refresh(&self) -> Result<Option<DateTime<Local>>, String> {
        self.last_refresh
            .lock()
            .map(|last| *last)
            .map_err(|e| format!("Failed to lock last refresh time: {}", e))
    }

    /// Subscribe to display updates
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.display_update_tx.subscribe()
    }

    /// Calculate host uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
