//! Seismic bulletin report service.
//!
//! Lists recent catalog events, generates bulletin fields for a selected
//! event, and builds flash assessments from pasted bulletin text.

mod config;
mod error;
mod extract;
mod routes;
mod state;

use quake_catalog::CatalogClient;
use quake_core::{load_reference_points, ConfigError as SettingsError, ReportSettings};
use tower_http::services::ServeDir;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::{AppState, CatalogSource};

fn load_settings(path: &str) -> Result<ReportSettings, SettingsError> {
    match ReportSettings::load(path) {
        Ok(settings) => Ok(settings),
        Err(SettingsError::Io { path, source }) => {
            warn!(path = %path, error = %source, "Report settings not readable, using defaults");
            Ok(ReportSettings::default())
        }
        Err(e) => Err(e),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting report service");

    let points = load_reference_points(&config.reference_points_path)?;
    info!(count = points.len(), primary = %points[0].name, "Loaded reference points");

    let settings = load_settings(&config.settings_path)?;
    info!(
        issue = settings.issue_number(),
        min_intensity = settings.min_report_intensity(),
        "Loaded report settings"
    );

    let catalog = if config.catalog_mock {
        info!("Using mock catalog");
        CatalogSource::Mock
    } else {
        info!(url = %config.catalog_url, "Using live catalog");
        CatalogSource::Live(CatalogClient::new(&config.catalog_url)?)
    };

    // Build application state
    let state = AppState::new(points, settings, catalog);

    // Build router
    let app = routes::router()
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .with_state(state);

    // Start server
    info!(addr = %config.addr, "Report service listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
