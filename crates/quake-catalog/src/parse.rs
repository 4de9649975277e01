//! Parsers for the CEIC speedsearch page.
//!
//! The page normally embeds the latest events as a script literal
//! (`const newdata = [...];`). When that is missing the rendered result
//! table is scanned instead.

use once_cell::sync::Lazy;
use quake_core::{EventRecord, FieldValue};
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::CatalogError;

const UNKNOWN_PLACE: &str = "未知地点";

static NEWDATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:const|var|let)\s+newdata\s*=\s*(\[[\s\S]*?\]);").expect("newdata regex")
});
static BLOCK_COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment regex"));
static ROW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("row regex"));
static CELL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<td[^>]*>(.*?)</td>").expect("cell regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag regex"));
static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}:\d{2}").expect("time regex"));
static NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?$").expect("number regex"));

/// Extract the `newdata` array literal with block comments removed.
///
/// Returns an empty string when the page has no such literal.
pub fn extract_newdata(html: &str) -> String {
    NEWDATA_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| BLOCK_COMMENT_RE.replace_all(m.as_str(), "").into_owned())
        .unwrap_or_default()
}

/// Parse the `newdata` JSON array. Items that are not event objects are
/// skipped; a malformed array yields an empty list.
pub fn parse_newdata(json: &str) -> Vec<EventRecord> {
    let items: Vec<Value> = match serde_json::from_str(json) {
        Ok(Value::Array(items)) => items,
        Ok(_) => return Vec::new(),
        Err(e) => {
            warn!(error = %e, "Failed to parse newdata array");
            return Vec::new();
        }
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<EventRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(error = %e, "Skipping malformed catalog item");
                None
            }
        })
        .collect()
}

fn cell_text(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}

/// Scan HTML tables for rows shaped `[M, time, lat, lon, depth, place, ...]`.
pub fn parse_table(html: &str) -> Vec<EventRecord> {
    let mut records = Vec::new();

    for row in ROW_RE.captures_iter(html) {
        let cells: Vec<String> = CELL_RE
            .captures_iter(&row[1])
            .map(|c| cell_text(&c[1]))
            .collect();
        if cells.len() < 6 {
            continue;
        }

        let (magnitude, time, lat, lon, depth, place) =
            (&cells[0], &cells[1], &cells[2], &cells[3], &cells[4], &cells[5]);
        let numeric = [magnitude, lat, lon, depth].iter().all(|v| NUMBER_RE.is_match(v));
        if !TIME_RE.is_match(time) || !numeric {
            continue;
        }

        records.push(EventRecord {
            magnitude: Some(FieldValue::Text(magnitude.clone())),
            origin_time: Some(time.clone()),
            epicenter_lat: Some(FieldValue::Text(lat.clone())),
            epicenter_lon: Some(FieldValue::Text(lon.clone())),
            depth_km: depth.parse::<f64>().ok().map(FieldValue::Number),
            location: Some(if place.is_empty() {
                UNKNOWN_PLACE.to_string()
            } else {
                place.clone()
            }),
            event_id: None,
        });
    }

    records
}

/// Parse a catalog page: the `newdata` literal first, the table second.
pub fn parse_catalog(html: &str) -> Result<Vec<EventRecord>, CatalogError> {
    let newdata = extract_newdata(html);
    if !newdata.is_empty() {
        let records = parse_newdata(&newdata);
        if !records.is_empty() {
            debug!(count = records.len(), "Parsed catalog from newdata");
            return Ok(records);
        }
    }

    let records = parse_table(html);
    if !records.is_empty() {
        debug!(count = records.len(), "Parsed catalog from table");
        return Ok(records);
    }

    Err(CatalogError::NoEvents)
}
