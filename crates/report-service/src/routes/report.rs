//! Report generation routes.

use axum::extract::State;
use axum::Json;
use quake_core::{
    assemble_record, EventRecord, ReferencePoint, ReportRecord, ReportSettings, SiteEstimate,
};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Generated report plus the details the preview pane shows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    /// Template fields.
    pub report: ReportRecord,
    /// Per-site estimates in reference order.
    pub sites: Vec<SiteEstimate>,
    /// Whether the primary intensity reaches the reporting threshold.
    pub meets_threshold: bool,
}

/// Generate bulletin fields for an event.
pub async fn report_api(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<EventRecord>,
) -> Result<Json<ReportResponse>> {
    let report = assemble_record(&record, &state.points, &state.settings)?;
    let meets_threshold = state.settings.meets_threshold(&report);

    info!(
        event_id = record.event_id.as_deref().unwrap_or("-"),
        site = report.primary_site().map_or("-", |s| s.name.as_str()),
        distance_km = report.primary_distance_km,
        intensity = report.primary_intensity,
        meets_threshold,
        "Generated report"
    );

    Ok(Json(ReportResponse {
        sites: report.sites.clone(),
        report,
        meets_threshold,
    }))
}

/// The configured reference sites.
pub async fn reference_points_api(State(state): State<AppState>) -> Json<Vec<ReferencePoint>> {
    Json(state.points.as_ref().clone())
}

/// The configured report settings.
pub async fn settings_api(State(state): State<AppState>) -> Json<ReportSettings> {
    Json(state.settings.as_ref().clone())
}
