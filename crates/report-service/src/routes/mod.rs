//! Route handlers for the report service.

pub mod events;
pub mod flash;
pub mod health;
pub mod report;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Event selection
        .route("/api/events", get(events::events_api))
        // Report generation
        .route("/api/reference-points", get(report::reference_points_api))
        .route("/api/settings", get(report::settings_api))
        .route("/api/report", post(report::report_api))
        // Flash reports
        .route("/api/flash/parse", post(flash::parse_api))
        .route("/api/flash/assessment", post(flash::assessment_api))
}
