//! Error types for report assembly and configuration loading.

use thiserror::Error;

/// Errors raised while turning an event into a report.
///
/// Every variant is an input problem on the caller's side. Nothing here is
/// retryable and no partially filled record is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    /// A required event field is absent.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// A required numeric field could not be read as a finite number.
    #[error("Invalid number for '{field}': {value}")]
    InvalidNumber { field: &'static str, value: String },

    /// The origin time is not in `YYYY-MM-DD HH:MM:SS` form.
    #[error("Invalid origin time: {0}")]
    InvalidOriginTime(String),

    /// The reference point list is empty.
    #[error("At least one reference point is required")]
    NoReferencePoints,
}

/// Errors that can occur when loading settings or reference points.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config parsed but is not usable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors from building a flash assessment message.
#[derive(Debug, Error)]
pub enum FlashError {
    /// Required fields were not supplied.
    #[error("Incomplete flash report, missing: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    /// The analysis paragraph could not be assembled.
    #[error(transparent)]
    Report(#[from] ReportError),
}
