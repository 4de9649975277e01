//! Display summaries for catalog listings.

use quake_core::{event_id_for, EventRecord, FieldValue};
use serde::{Deserialize, Serialize};

/// Data source credited on every entry.
pub const SOURCE_NAME: &str = "中国地震台网中心";

/// One catalog event prepared for the selection table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub title: String,
    pub time: String,
    pub magnitude: String,
    /// `纬度：{lat}|经度：{lon}`
    pub location: String,
    pub depth: String,
    pub from: String,
    pub info: String,
    pub url: String,
    pub latitude: String,
    pub longitude: String,
    pub place: String,
    pub event_id: String,
}

fn text_or(value: Option<&FieldValue>, default: &str) -> String {
    value
        .map(FieldValue::to_display)
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn str_or(value: Option<&str>, default: &str) -> String {
    value
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(default)
        .to_string()
}

impl CatalogEntry {
    /// Summarize a raw record. Missing fields get placeholder text rather
    /// than failing, so a partial feed still lists.
    pub fn from_record(record: &EventRecord, url: &str) -> Self {
        let magnitude = text_or(record.magnitude.as_ref(), "未知");
        let time = str_or(record.origin_time.as_deref(), "未知时间");
        let latitude = text_or(record.epicenter_lat.as_ref(), "0");
        let longitude = text_or(record.epicenter_lon.as_ref(), "0");
        let depth = text_or(record.depth_km.as_ref(), "0");
        let place = str_or(record.location.as_deref(), "未知地点");
        let event_id = record
            .event_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| event_id_for(&time));

        Self {
            title: format!("{}发生{}级地震", place, magnitude),
            info: format!(
                "根据中国地震台网测定，{}在{}发生了{}级地震，震源深度{}公里，震中位于({},{})。",
                time, place, magnitude, depth, longitude, latitude
            ),
            location: format!("纬度：{}|经度：{}", latitude, longitude),
            from: SOURCE_NAME.to_string(),
            url: url.to_string(),
            time,
            magnitude,
            depth,
            latitude,
            longitude,
            place,
            event_id,
        }
    }

    /// The event record a selection of this entry hands to the report
    /// generator. Depth falls back to 0 when it is not a number.
    pub fn to_record(&self) -> EventRecord {
        let depth = self.depth.trim().parse::<f64>().unwrap_or(0.0);
        EventRecord {
            magnitude: Some(FieldValue::Text(self.magnitude.clone())),
            origin_time: Some(self.time.clone()),
            epicenter_lat: Some(FieldValue::Text(self.latitude.clone())),
            epicenter_lon: Some(FieldValue::Text(self.longitude.clone())),
            depth_km: Some(FieldValue::Number(depth)),
            location: Some(self.place.clone()),
            event_id: Some(self.event_id.clone()),
        }
    }
}
