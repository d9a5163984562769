//! One Today widget - a home-screen style daily goal widget
//!
//! This is the main entry point for the widget host.

use std::sync::Arc;

use chrono::Local;
use tracing::{info, warn};

use onetoday_widget::{
    config::Config,
    render,
    state::AppState,
    store::{GoalStore, PrefsStore},
    tasks::widget_refresh_task,
    utils::shutdown_signal,
    widget::{build_refresh_schedule, next_reload},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("onetoday_widget={}", config.log_level()))
        .init();

    info!("Starting onetoday-widget v0.1.0");
    info!(
        "Configuration: store={}, horizon={}min, interval={}s",
        config.store.display(),
        config.horizon,
        config.interval
    );

    let store = PrefsStore::open(&config.store);
    if !store.exists() {
        // Absent data means the empty display by policy, so keep running
        // and pick the file up once the app writes it
        warn!(
            "Preference store {} does not exist yet, showing the empty state",
            config.store.display()
        );
    }

    if config.timeline {
        let record = store.snapshot();
        let now = Local::now();
        let entries: Vec<_> = build_refresh_schedule(&record, &now, config.horizon).collect();

        println!("{}", render::render_schedule(&entries));
        println!(
            "reload at {}",
            next_reload(&now, config.horizon).format("%Y-%m-%d %H:%M")
        );
        return Ok(());
    }

    // Create application state around the store port
    let state = Arc::new(AppState::new(
        Box::new(store),
        config.horizon,
        config.interval,
    ));

    if config.once {
        let display = state.refresh().map_err(anyhow::Error::msg)?;
        if config.json {
            println!("{}", render::to_json(&display)?);
        } else {
            println!("{}", render::render(&display));
        }
        return Ok(());
    }

    // Watch mode: evaluate now, then let the refresh task drive updates the
    // way a platform host would
    if let Err(e) = state.refresh() {
        warn!("Initial refresh failed: {}", e);
    }
    println!(
        "{}",
        render::render(&state.current_display().map_err(anyhow::Error::msg)?)
    );

    let mut display_rx = state.subscribe_display();

    let refresh_state = Arc::clone(&state);
    tokio::spawn(async move {
        widget_refresh_task(refresh_state).await;
    });

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = display_rx.changed() => {
                match changed {
                    Ok(()) => {
                        let display = display_rx.borrow_and_update().clone();
                        println!("{}", render::render(&display));
                        if let Ok(Some(at)) = state.last_refresh() {
                            info!("Display updated at {}", at.format("%H:%M:%S"));
                        }
                    }
                    Err(_) => break,
                }
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Widget host shutdown complete after {}", state.get_uptime());
    Ok(())
}
