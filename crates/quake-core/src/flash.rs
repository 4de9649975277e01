//! Flash reports built from pasted network bulletin text.
//!
//! Operators paste a message such as
//! `中国地震台网正式测定：2025年10月11日11时18分15秒在四川宜宾市筠连县（北纬28.10度，东经104.56度）发生4.3级地震，震源深度10公里。`
//! and get back the fields it contains plus a short assessment message with
//! the localized analysis appended.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{FlashError, ReportError};
use crate::event::SeismicEvent;
use crate::reference::ReferencePoint;
use crate::report::assemble;
use crate::settings::ReportSettings;

/// Header line used when the caller does not supply one.
pub const DEFAULT_HEADER: &str = "【绥江县防震减灾局】";

const SOURCE_OFFICIAL: &str = "据中国地震台网正式测定";
const SOURCE_AUTOMATIC: &str = "据中国地震台网自动测定";
const SOURCE_YUNNAN: &str = "据云南地震台网初步测定";

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d{4})年(\d{1,2})月(\d{1,2})日\s*(\d{1,2})时(\d{1,2})分(\d{1,2})秒")
        .expect("time regex")
});
static PLACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"在(.+?)(?:附近|（|\(|发生)").expect("place regex"));
static LAT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(北纬|南纬)\s*([0-9]+(?:\.[0-9]+)?)度").expect("lat regex"));
static LON_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(东经|西经)\s*([0-9]+(?:\.[0-9]+)?)度").expect("lon regex"));
static MAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"发生\s*([0-9]+(?:\.[0-9]+)?)级").expect("magnitude regex"));
static DEPTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"震源深度\s*([0-9]+(?:\.[0-9]+)?)\s*(?:公里|千米)").expect("depth regex")
});

/// Fields recognised in a flash bulletin. Anything not found stays `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashFields {
    /// Attribution, e.g. `据中国地震台网正式测定`.
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub magnitude: Option<f64>,
    /// Origin time in the Chinese form `2025年10月11日11时18分15秒`.
    #[serde(default)]
    pub origin_time: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub depth_km: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
}

impl FlashFields {
    /// Whether the source is a formal network determination.
    pub fn is_official(&self) -> bool {
        self.source
            .as_deref()
            .is_some_and(|s| s.contains("正式测定"))
    }

    /// Overlay freshly parsed values onto these, keeping existing values where
    /// nothing was parsed.
    pub fn merged_with(self, parsed: FlashFields) -> FlashFields {
        FlashFields {
            source: parsed.source.or(self.source),
            magnitude: parsed.magnitude.or(self.magnitude),
            origin_time: parsed.origin_time.or(self.origin_time),
            lat: parsed.lat.or(self.lat),
            lon: parsed.lon.or(self.lon),
            depth_km: parsed.depth_km.or(self.depth_km),
            place: parsed.place.or(self.place),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.source.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("source");
        }
        if self.magnitude.is_none() {
            missing.push("magnitude");
        }
        if self.lat.is_none() {
            missing.push("lat");
        }
        if self.lon.is_none() {
            missing.push("lon");
        }
        if self.origin_time.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("originTime");
        }
        if self.place.as_deref().map_or(true, |s| s.trim().is_empty()) {
            missing.push("place");
        }
        missing
    }

    /// Build an event for intensity estimation.
    pub fn to_event(&self) -> Result<SeismicEvent, FlashError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(FlashError::Incomplete(missing));
        }

        let chinese_time = self.origin_time.as_deref().unwrap_or_default();
        let origin_time = chinese_time_to_iso(chinese_time)
            .ok_or_else(|| ReportError::InvalidOriginTime(chinese_time.to_string()))?;

        let mut event = SeismicEvent::new(
            self.magnitude.unwrap_or_default(),
            origin_time,
            self.lon.unwrap_or_default(),
            self.lat.unwrap_or_default(),
        )
        .with_location(self.place.as_deref().unwrap_or_default().trim());
        event.depth_km = self.depth_km;
        Ok(event)
    }
}

/// Convert `2025年10月11日11时18分15秒` into `2025-10-11 11:18:15`.
pub fn chinese_time_to_iso(text: &str) -> Option<String> {
    let caps = TIME_RE.captures(text)?;
    let field = |i: usize| caps.get(i).map_or("", |m| m.as_str());
    let pad = |i: usize| format!("{:0>2}", field(i));
    Some(format!(
        "{}-{}-{} {}:{}:{}",
        field(1),
        pad(2),
        pad(3),
        pad(4),
        pad(5),
        pad(6)
    ))
}

fn signed_coordinate(re: &Regex, text: &str, negative: &str) -> Option<f64> {
    let caps = re.captures(text)?;
    let value: f64 = caps.get(2)?.as_str().parse().ok()?;
    if caps.get(1)?.as_str() == negative {
        Some(-value)
    } else {
        Some(value)
    }
}

fn first_number(re: &Regex, text: &str) -> Option<f64> {
    re.captures(text)?.get(1)?.as_str().parse().ok()
}

/// Pull event fields out of bulletin text.
pub fn parse_flash_text(text: &str) -> FlashFields {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let source = if text.contains("中国地震台网正式测定") {
        Some(SOURCE_OFFICIAL)
    } else if text.contains("中国地震台网自动测定") {
        Some(SOURCE_AUTOMATIC)
    } else if text.contains("云南地震台网初步测定") {
        Some(SOURCE_YUNNAN)
    } else {
        None
    };

    let origin_time = TIME_RE.captures(&text).map(|c| {
        format!(
            "{}年{}月{}日{}时{}分{}秒",
            &c[1], &c[2], &c[3], &c[4], &c[5], &c[6]
        )
    });

    let place = PLACE_RE
        .captures(&text)
        .map(|c| c[1].trim().to_string())
        .filter(|s| !s.is_empty());

    FlashFields {
        source: source.map(str::to_string),
        magnitude: first_number(&MAG_RE, &text),
        origin_time,
        lat: signed_coordinate(&LAT_RE, &text, "南纬"),
        lon: signed_coordinate(&LON_RE, &text, "西经"),
        depth_km: first_number(&DEPTH_RE, &text),
        place,
    }
}

/// The one-line event statement of the assessment.
pub fn main_line(fields: &FlashFields) -> Result<String, FlashError> {
    let missing = fields.missing();
    if !missing.is_empty() {
        return Err(FlashError::Incomplete(missing));
    }

    let source = fields.source.as_deref().unwrap_or_default().trim();
    let official = fields.is_official();
    let approx = if official { "" } else { "左右" };
    let disclaimer = if official {
        ""
    } else if source.contains("云南地震台网初步测定") {
        "最终结果以中国地震台网测定为准。"
    } else {
        "最终结果以正式测定为准。"
    };
    let depth = fields
        .depth_km
        .map(|d| format!("，震源深度{}公里", d))
        .unwrap_or_default();

    Ok(format!(
        "{}：{}在{}（北纬{}度、东经{}度）发生{}{}级地震{}。{}",
        source,
        fields.origin_time.as_deref().unwrap_or_default().trim(),
        fields.place.as_deref().unwrap_or_default().trim(),
        fields.lat.unwrap_or_default(),
        fields.lon.unwrap_or_default(),
        fields.magnitude.unwrap_or_default(),
        approx,
        depth,
        disclaimer
    ))
}

/// Full assessment message: header, event statement, blank line, analysis.
pub fn build_assessment(
    fields: &FlashFields,
    points: &[ReferencePoint],
    settings: &ReportSettings,
    header: &str,
) -> Result<String, FlashError> {
    let line = main_line(fields)?;
    let event = fields.to_event()?;
    let report = assemble(&event, points, settings)?;
    Ok(format!("{}\n{}\n\n{}", header, line, report.analysis_text))
}
