//! Report settings snapshot supplied by the configuration collaborator.
//!
//! Every field is optional. Missing values fall back to defaults instead of
//! failing, unlike the required event fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::reference::ReferencePoint;
use crate::report::ReportRecord;

/// Issue number used when none is configured.
pub const DEFAULT_ISSUE_NUMBER: i64 = 1;
/// Supervising leader used when none is configured.
pub const DEFAULT_LEADER: &str = "未知";
/// Minimum primary-site intensity that warrants a bulletin.
pub const DEFAULT_MIN_REPORT_INTENSITY: u8 = 3;

/// Centre of the monitored service area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ServiceCentre {
    pub centre_lon: f64,
    pub centre_lat: f64,
}

/// Configuration snapshot, keyed the way the settings store keys it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSettings {
    #[serde(rename = "期号", default, skip_serializing_if = "Option::is_none")]
    pub issue_number: Option<i64>,
    #[serde(rename = "分管领导", default, skip_serializing_if = "Option::is_none")]
    pub supervising_leader: Option<String>,
    #[serde(rename = "报送最小烈度", default, skip_serializing_if = "Option::is_none")]
    pub min_report_intensity: Option<u8>,
    #[serde(rename = "服务位置", default, skip_serializing_if = "Option::is_none")]
    pub service_centre: Option<ServiceCentre>,
}

impl ReportSettings {
    /// Parse settings from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Builder method to set the issue number.
    pub fn with_issue_number(mut self, issue: i64) -> Self {
        self.issue_number = Some(issue);
        self
    }

    /// Builder method to set the supervising leader.
    pub fn with_leader(mut self, leader: impl Into<String>) -> Self {
        self.supervising_leader = Some(leader.into());
        self
    }

    /// Configured issue number; zero or negative counts as unset.
    pub fn issue_number(&self) -> i64 {
        self.issue_number
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ISSUE_NUMBER)
    }

    /// Configured supervising leader; blank counts as unset.
    pub fn supervising_leader(&self) -> &str {
        self.supervising_leader
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_LEADER)
    }

    pub fn min_report_intensity(&self) -> u8 {
        self.min_report_intensity
            .unwrap_or(DEFAULT_MIN_REPORT_INTENSITY)
    }

    /// Whether the report's primary intensity reaches the reporting threshold.
    pub fn meets_threshold(&self, report: &ReportRecord) -> bool {
        report.primary_intensity >= self.min_report_intensity()
    }

    /// The service centre as a reference point, if configured.
    pub fn centre_point(&self) -> Option<ReferencePoint> {
        self.service_centre
            .map(|c| ReferencePoint::new("服务位置", c.centre_lon, c.centre_lat))
    }
}
