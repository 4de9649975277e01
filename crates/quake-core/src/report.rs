//! Bulletin field assembly.
//!
//! [`assemble`] turns one event, an ordered list of reference sites and a
//! settings snapshot into the field set the bulletin template is filled from.
//! It reads no clock and keeps no state, so identical inputs always produce
//! identical records.

use chrono::{Datelike, NaiveDateTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::event::{EventRecord, SeismicEvent};
use crate::geo::distance_km;
use crate::intensity::intensity_degree;
use crate::reference::ReferencePoint;
use crate::settings::ReportSettings;

/// Format of `O_TIME` values.
pub const ORIGIN_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Location used when the event has no place description.
pub const UNKNOWN_LOCATION: &str = "未知地点";
/// Closing line of every analysis paragraph.
pub const DISCLAIMER: &str = "——此烈度值仅供参考，精确烈度以中国地震局公布信息为准。";

// chrono accepts unpadded fields and signed years, so the shape is checked first.
static ORIGIN_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$").expect("origin time regex")
});

/// Distance and intensity estimate for one reference site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteEstimate {
    pub name: String,
    /// Unrounded great-circle distance; the intensity is computed from this.
    pub distance_km: f64,
    pub rounded_distance_km: i64,
    pub intensity: u8,
}

/// Bulletin fields. Serialized keys match the document template placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "期号")]
    pub issue_number: i64,
    #[serde(rename = "发文日期")]
    pub issue_date: String,
    #[serde(rename = "标题")]
    pub title: String,
    #[serde(rename = "发震时间")]
    pub origin_time_formatted: String,
    #[serde(rename = "发震地点")]
    pub location: String,
    #[serde(rename = "震级")]
    pub magnitude: f64,
    #[serde(rename = "震源深度")]
    pub depth_km: Option<f64>,
    #[serde(rename = "经度")]
    pub lon: f64,
    #[serde(rename = "纬度")]
    pub lat: f64,
    #[serde(rename = "震中距离")]
    pub primary_distance_km: i64,
    #[serde(rename = "预估烈度")]
    pub primary_intensity: u8,
    #[serde(rename = "分管领导")]
    pub supervising_leader: String,
    #[serde(rename = "本地化综合分析")]
    pub analysis_text: String,
    /// Per-site estimates in reference order. Not part of the template.
    #[serde(skip)]
    pub sites: Vec<SiteEstimate>,
}

impl ReportRecord {
    /// Estimate for the primary reference site.
    pub fn primary_site(&self) -> Option<&SiteEstimate> {
        self.sites.first()
    }
}

/// Parse an origin time as a local wall-clock value. No zone conversion.
pub fn parse_origin_time(value: &str) -> Result<NaiveDateTime, ReportError> {
    let trimmed = value.trim();
    if !ORIGIN_TIME_RE.is_match(trimmed) {
        return Err(ReportError::InvalidOriginTime(value.to_string()));
    }
    NaiveDateTime::parse_from_str(trimmed, ORIGIN_TIME_FORMAT)
        .map_err(|_| ReportError::InvalidOriginTime(value.to_string()))
}

/// `YYYY年MM月DD日`
pub fn format_issue_date(time: &NaiveDateTime) -> String {
    format!("{:04}年{:02}月{:02}日", time.year(), time.month(), time.day())
}

/// `YYYY年MM月DD日 HH时mm分ss秒`
pub fn format_origin_time(time: &NaiveDateTime) -> String {
    format!(
        "{} {:02}时{:02}分{:02}秒",
        format_issue_date(time),
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Estimate distance and intensity at one site.
pub fn estimate_site(
    magnitude: f64,
    epicenter_lon: f64,
    epicenter_lat: f64,
    point: &ReferencePoint,
) -> SiteEstimate {
    let distance = distance_km(epicenter_lon, epicenter_lat, point.lon, point.lat);
    SiteEstimate {
        name: point.name.clone(),
        distance_km: distance,
        rounded_distance_km: distance.round() as i64,
        intensity: intensity_degree(magnitude, distance),
    }
}

/// Estimate every site, keeping the input order.
pub fn estimate_sites(event: &SeismicEvent, points: &[ReferencePoint]) -> Vec<SiteEstimate> {
    points
        .iter()
        .map(|p| estimate_site(event.magnitude, event.epicenter_lon, event.epicenter_lat, p))
        .collect()
}

/// Render the localized analysis paragraph.
///
/// The primary site comes first and ends with `。`, further sites end with
/// `；` except the last which ends with `。`, and the disclaimer closes it.
pub fn analysis_text(sites: &[SiteEstimate]) -> String {
    let mut lines = Vec::with_capacity(sites.len() + 1);

    if let Some((primary, rest)) = sites.split_first() {
        lines.push(format!(
            "震中到{}距离{}公里，预估烈度{}度。",
            primary.name, primary.rounded_distance_km, primary.intensity
        ));

        for (i, site) in rest.iter().enumerate() {
            let mark = if i + 1 == rest.len() { "。" } else { "；" };
            lines.push(format!(
                "到{}距离{}公里，预估烈度{}度{}",
                site.name, site.rounded_distance_km, site.intensity, mark
            ));
        }
    }

    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

fn ensure_finite(value: f64, field: &'static str) -> Result<f64, ReportError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ReportError::InvalidNumber {
            field,
            value: value.to_string(),
        })
    }
}

/// Build the bulletin fields for an event.
///
/// `points[0]` is the primary site. Fails on an empty point list, a
/// non-finite magnitude or epicenter, or an origin time that does not parse.
pub fn assemble(
    event: &SeismicEvent,
    points: &[ReferencePoint],
    settings: &ReportSettings,
) -> Result<ReportRecord, ReportError> {
    let magnitude = ensure_finite(event.magnitude, "M")?;
    let lon = ensure_finite(event.epicenter_lon, "EPI_LON")?;
    let lat = ensure_finite(event.epicenter_lat, "EPI_LAT")?;
    let origin = parse_origin_time(&event.origin_time)?;

    if points.is_empty() {
        return Err(ReportError::NoReferencePoints);
    }

    let issue_date = format_issue_date(&origin);
    let location = match event.location_name.trim() {
        "" => UNKNOWN_LOCATION.to_string(),
        name => name.to_string(),
    };
    let title = format!("{} {}发生{}级地震", issue_date, location, magnitude);

    let sites = estimate_sites(event, points);
    let analysis = analysis_text(&sites);
    let primary = &sites[0];

    Ok(ReportRecord {
        issue_number: settings.issue_number(),
        issue_date,
        title,
        origin_time_formatted: format_origin_time(&origin),
        location,
        magnitude,
        depth_km: event.depth_km.filter(|d| d.is_finite()),
        lon,
        lat,
        primary_distance_km: primary.rounded_distance_km,
        primary_intensity: primary.intensity,
        supervising_leader: settings.supervising_leader().to_string(),
        analysis_text: analysis,
        sites,
    })
}

/// Validate a raw record and assemble it.
pub fn assemble_record(
    record: &EventRecord,
    points: &[ReferencePoint],
    settings: &ReportSettings,
) -> Result<ReportRecord, ReportError> {
    let event = SeismicEvent::from_record(record)?;
    assemble(&event, points, settings)
}
