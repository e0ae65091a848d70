//! Development server for the timesheet engine.
//!
//! Serves the timesheet API backed by the calendar file in the configuration
//! directory and an in-memory submission store.

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::boundary::{RecordingSubmitter, StaticCalendar};
use timesheet_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("TIMESHEET_CONFIG_DIR").unwrap_or_else(|_| "./config/default".to_string());
    let loader = ConfigLoader::load(&config_dir)?;

    let calendar_path = Path::new(&config_dir).join("calendar.yaml");
    let overrides = if calendar_path.exists() {
        ConfigLoader::load_calendar(&calendar_path)?
    } else {
        Vec::new()
    };
    info!(
        config_dir = %config_dir,
        overrides = overrides.len(),
        week_off_days = ?loader.config().week_off_days,
        "Configuration loaded"
    );

    let state = AppState::new(
        &loader,
        Arc::new(StaticCalendar::new(overrides)),
        Arc::new(RecordingSubmitter::new()),
    )?;

    let bind = loader.config().server.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!(address = %bind, "Timesheet API listening");

    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
