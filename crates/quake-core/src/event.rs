//! Seismic event types.
//!
//! [`EventRecord`] is the loose wire shape used by the CEIC catalog and the
//! browser client. [`SeismicEvent`] is the validated form the engine works on.

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A field that may arrive as a JSON number or as a numeric string.
///
/// The CEIC feed sends magnitudes and coordinates as strings (`"5.7"`), while
/// manually entered events use plain numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// The value as a finite number, if it is one.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FieldValue::Number(n) => *n,
            FieldValue::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// The value as the caller sent it.
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Whether the field is an empty or whitespace-only string.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// Raw event record as sent by the catalog page or the event-entry form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "M", default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<FieldValue>,
    #[serde(rename = "O_TIME", default, skip_serializing_if = "Option::is_none")]
    pub origin_time: Option<String>,
    #[serde(rename = "EPI_LAT", default, skip_serializing_if = "Option::is_none")]
    pub epicenter_lat: Option<FieldValue>,
    #[serde(rename = "EPI_LON", default, skip_serializing_if = "Option::is_none")]
    pub epicenter_lon: Option<FieldValue>,
    #[serde(rename = "EPI_DEPTH", default, skip_serializing_if = "Option::is_none")]
    pub depth_km: Option<FieldValue>,
    #[serde(rename = "LOCATION_C", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "NEW_DID", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

/// A validated earthquake event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeismicEvent {
    pub magnitude: f64,
    /// Local wall-clock time, `YYYY-MM-DD HH:MM:SS` (UTC+8 implied).
    pub origin_time: String,
    pub epicenter_lon: f64,
    pub epicenter_lat: f64,
    #[serde(default)]
    pub depth_km: Option<f64>,
    #[serde(default, rename = "referenceLocationName")]
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl SeismicEvent {
    /// Create an event with the required fields.
    pub fn new(
        magnitude: f64,
        origin_time: impl Into<String>,
        epicenter_lon: f64,
        epicenter_lat: f64,
    ) -> Self {
        Self {
            magnitude,
            origin_time: origin_time.into(),
            epicenter_lon,
            epicenter_lat,
            depth_km: None,
            location_name: String::new(),
            event_id: None,
        }
    }

    /// Builder method to set the focal depth.
    pub fn with_depth(mut self, depth_km: f64) -> Self {
        self.depth_km = Some(depth_km);
        self
    }

    /// Builder method to set the reference location description.
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.location_name = name.into();
        self
    }

    /// Validate a raw record.
    ///
    /// Magnitude and epicenter coordinates must be present and numeric, and
    /// the origin time must be present. A depth that is blank or not a number
    /// is treated as unknown.
    pub fn from_record(record: &EventRecord) -> Result<Self, ReportError> {
        let magnitude = required_number(record.magnitude.as_ref(), "M")?;
        let epicenter_lon = required_number(record.epicenter_lon.as_ref(), "EPI_LON")?;
        let epicenter_lat = required_number(record.epicenter_lat.as_ref(), "EPI_LAT")?;

        let origin_time = record
            .origin_time
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ReportError::MissingField("O_TIME"))?
            .to_string();

        Ok(Self {
            magnitude,
            origin_time,
            epicenter_lon,
            epicenter_lat,
            depth_km: record.depth_km.as_ref().and_then(FieldValue::as_f64),
            location_name: record.location.clone().unwrap_or_default(),
            event_id: record.event_id.clone(),
        })
    }

    /// Convert back into the wire shape.
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            magnitude: Some(FieldValue::Number(self.magnitude)),
            origin_time: Some(self.origin_time.clone()),
            epicenter_lat: Some(FieldValue::Number(self.epicenter_lat)),
            epicenter_lon: Some(FieldValue::Number(self.epicenter_lon)),
            depth_km: self.depth_km.map(FieldValue::Number),
            location: Some(self.location_name.clone()),
            event_id: self.event_id.clone(),
        }
    }
}

fn required_number(value: Option<&FieldValue>, field: &'static str) -> Result<f64, ReportError> {
    let value = match value {
        Some(v) if !v.is_blank() => v,
        _ => return Err(ReportError::MissingField(field)),
    };
    value.as_f64().ok_or_else(|| ReportError::InvalidNumber {
        field,
        value: value.to_display(),
    })
}

/// Catalog id for an event without one: `CC` followed by the digits of the
/// origin time.
pub fn event_id_for(origin_time: &str) -> String {
    let digits: String = origin_time.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("CC{}", digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceic_record() -> EventRecord {
        serde_json::from_str(
            r#"{"M":"5.7","O_TIME":"2025-03-31 23:54:19","EPI_LAT":"-10.30","EPI_LON":"119.05","EPI_DEPTH":30,"NEW_DID":"CC20250331235419","LOCATION_C":"印尼松巴哇岛南部海域"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_from_ceic_record() {
        let event = SeismicEvent::from_record(&ceic_record()).unwrap();
        assert_eq!(event.magnitude, 5.7);
        assert_eq!(event.epicenter_lat, -10.30);
        assert_eq!(event.epicenter_lon, 119.05);
        assert_eq!(event.depth_km, Some(30.0));
        assert_eq!(event.origin_time, "2025-03-31 23:54:19");
        assert_eq!(event.location_name, "印尼松巴哇岛南部海域");
        assert_eq!(event.event_id.as_deref(), Some("CC20250331235419"));
    }

    #[test]
    fn test_missing_latitude_is_rejected() {
        let mut record = ceic_record();
        record.epicenter_lat = None;
        assert_eq!(
            SeismicEvent::from_record(&record),
            Err(ReportError::MissingField("EPI_LAT"))
        );
    }

    #[test]
    fn test_blank_magnitude_is_missing() {
        let mut record = ceic_record();
        record.magnitude = Some(FieldValue::from("  "));
        assert_eq!(SeismicEvent::from_record(&record), Err(ReportError::MissingField("M")));
    }

    #[test]
    fn test_non_numeric_longitude_is_rejected() {
        let mut record = ceic_record();
        record.epicenter_lon = Some(FieldValue::from("east"));
        assert_eq!(
            SeismicEvent::from_record(&record),
            Err(ReportError::InvalidNumber {
                field: "EPI_LON",
                value: "east".to_string()
            })
        );
    }

    #[test]
    fn test_missing_origin_time_is_rejected() {
        let mut record = ceic_record();
        record.origin_time = None;
        assert_eq!(
            SeismicEvent::from_record(&record),
            Err(ReportError::MissingField("O_TIME"))
        );
    }

    #[test]
    fn test_unparseable_depth_is_unknown() {
        let mut record = ceic_record();
        record.depth_km = Some(FieldValue::from("n/a"));
        let event = SeismicEvent::from_record(&record).unwrap();
        assert_eq!(event.depth_km, None);
    }

    #[test]
    fn test_null_fields_deserialize_as_missing() {
        let record: EventRecord = serde_json::from_str(
            r#"{"M":null,"O_TIME":"2025-01-01 00:00:00","EPI_LAT":1,"EPI_LON":2}"#,
        )
        .unwrap();
        assert_eq!(SeismicEvent::from_record(&record), Err(ReportError::MissingField("M")));
    }

    #[test]
    fn test_record_round_trip_keeps_keys() {
        let event = SeismicEvent::new(4.2, "2024-01-15 10:25:32", 104.1, 28.2)
            .with_depth(12.0)
            .with_location("四川绥江县");
        let json = serde_json::to_value(event.to_record()).unwrap();
        assert_eq!(json["M"], 4.2);
        assert_eq!(json["EPI_DEPTH"], 12.0);
        assert_eq!(json["LOCATION_C"], "四川绥江县");
        assert!(json.get("NEW_DID").is_none());
    }

    #[test]
    fn test_event_id_for() {
        assert_eq!(event_id_for("2025-04-03 05:03:39"), "CC20250403050339");
    }
}
