//! Application state shared across handlers.

use std::sync::Arc;

use quake_catalog::{mock, CatalogClient, CatalogError};
use quake_core::{EventRecord, ReferencePoint, ReportSettings};

/// Where event listings come from.
#[derive(Clone)]
pub enum CatalogSource {
    Live(CatalogClient),
    Mock,
}

impl CatalogSource {
    /// Latest event records and the URL they were listed from.
    pub async fn latest(&self) -> Result<(Vec<EventRecord>, String), CatalogError> {
        match self {
            CatalogSource::Live(client) => {
                let records = client.latest_records().await?;
                Ok((records, client.url().to_string()))
            }
            CatalogSource::Mock => Ok((mock::mock_records(), mock::MOCK_URL.to_string())),
        }
    }
}

/// Shared application state. Everything in it is read-only after start-up.
#[derive(Clone)]
pub struct AppState {
    /// Ordered reference sites, primary first.
    pub points: Arc<Vec<ReferencePoint>>,
    /// Report settings snapshot.
    pub settings: Arc<ReportSettings>,
    /// Event catalog.
    pub catalog: CatalogSource,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        points: Vec<ReferencePoint>,
        settings: ReportSettings,
        catalog: CatalogSource,
    ) -> Self {
        Self {
            points: Arc::new(points),
            settings: Arc::new(settings),
            catalog,
        }
    }
}
