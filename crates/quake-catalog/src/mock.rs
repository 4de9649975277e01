//! Fixed events for development without network access.

use quake_core::{EventRecord, FieldValue};

use crate::entry::CatalogEntry;

/// URL recorded on mock entries.
pub const MOCK_URL: &str = "mock://catalog";

fn record(
    id: &str,
    time: &str,
    lat: &str,
    lon: &str,
    depth: f64,
    magnitude: &str,
    place: &str,
) -> EventRecord {
    EventRecord {
        magnitude: Some(FieldValue::from(magnitude)),
        origin_time: Some(time.to_string()),
        epicenter_lat: Some(FieldValue::from(lat)),
        epicenter_lon: Some(FieldValue::from(lon)),
        depth_km: Some(FieldValue::Number(depth)),
        location: Some(place.to_string()),
        event_id: Some(id.to_string()),
    }
}

/// Three recent-looking events near the service area.
pub fn mock_records() -> Vec<EventRecord> {
    vec![
        record("CEIC_001_NEW", "2024-01-15 10:25:32", "28.2", "104.1", 12.0, "4.2", "四川绥江县"),
        record("CEIC_002_NEW", "2024-01-15 08:12:45", "31.5", "103.8", 8.0, "3.8", "四川雅安市"),
        record("CEIC_003_NEW", "2024-01-14 22:41:18", "26.8", "100.2", 15.0, "5.1", "云南丽江市"),
    ]
}

/// Mock events as listing entries.
pub fn mock_entries() -> Vec<CatalogEntry> {
    mock_records()
        .iter()
        .map(|r| CatalogEntry::from_record(r, MOCK_URL))
        .collect()
}
