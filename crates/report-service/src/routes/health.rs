//! Health check for the report service.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::{AppState, CatalogSource};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    /// Number of loaded reference sites.
    pub reference_points: usize,
    /// `live` or `mock`.
    pub catalog: &'static str,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    let catalog = match &state.catalog {
        CatalogSource::Live(_) => "live",
        CatalogSource::Mock => "mock",
    };
    Json(Health {
        status: "ok",
        reference_points: state.points.len(),
        catalog,
    })
}
