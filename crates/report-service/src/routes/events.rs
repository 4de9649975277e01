//! Event listing routes.

use axum::extract::State;
use axum::Json;
use quake_catalog::CatalogEntry;
use quake_core::report::estimate_site;
use quake_core::{EventRecord, ReferencePoint, SeismicEvent};
use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::state::AppState;

/// One row of the event selection table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    /// Record to post back to `/api/report` when this row is selected.
    pub event: EventRecord,
    /// Rounded distance to the service centre, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centre_distance_km: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub centre_intensity: Option<u8>,
}

impl EventListing {
    fn new(entry: CatalogEntry, centre: Option<&ReferencePoint>) -> Self {
        let event = entry.to_record();
        let estimate = centre.and_then(|point| {
            let quake = SeismicEvent::from_record(&event).ok()?;
            Some(estimate_site(quake.magnitude, quake.epicenter_lon, quake.epicenter_lat, point))
        });

        Self {
            entry,
            event,
            centre_distance_km: estimate.as_ref().map(|e| e.rounded_distance_km),
            centre_intensity: estimate.as_ref().map(|e| e.intensity),
        }
    }
}

/// List the latest catalog events.
pub async fn events_api(State(state): State<AppState>) -> Result<Json<Vec<EventListing>>> {
    let (records, url) = state.catalog.latest().await?;
    let centre = state.settings.centre_point();

    let listings: Vec<EventListing> = records
        .iter()
        .map(|r| EventListing::new(CatalogEntry::from_record(r, &url), centre.as_ref()))
        .collect();

    info!(count = listings.len(), "Listed catalog events");
    Ok(Json(listings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::CatalogSource;
    use quake_core::ReportSettings;

    fn mock_state(settings: ReportSettings) -> AppState {
        AppState::new(
            vec![ReferencePoint::new("绥江县政府", 103.9668967771, 28.5956549725)],
            settings,
            CatalogSource::Mock,
        )
    }

    #[tokio::test]
    async fn test_mock_listing() {
        let state = mock_state(ReportSettings::default());
        let Json(listings) = events_api(State(state)).await.unwrap();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].entry.title, "四川绥江县发生4.2级地震");
        assert_eq!(listings[0].event.event_id.as_deref(), Some("CEIC_001_NEW"));
        assert!(listings[0].centre_distance_km.is_none());
    }

    #[tokio::test]
    async fn test_listing_with_service_centre() {
        let settings =
            ReportSettings::from_json(r#"{"服务位置": {"centre_lon": 104.1, "centre_lat": 28.2}}"#)
                .unwrap();
        let Json(listings) = events_api(State(mock_state(settings))).await.unwrap();
        assert_eq!(listings[0].centre_distance_km, Some(0));
        assert_eq!(listings[0].centre_intensity, Some(quake_core::intensity_degree(4.2, 0.0)));

        let json = serde_json::to_value(&listings[0]).unwrap();
        assert_eq!(json["centreDistanceKm"], 0);
        assert_eq!(json["title"], "四川绥江县发生4.2级地震");
        assert_eq!(json["event"]["M"], "4.2");
        assert_eq!(json["eventId"], "CEIC_001_NEW");
        assert!(json.get("event_id").is_none());
    }
}
