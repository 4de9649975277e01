//! Named reference sites that distances and intensities are reported for.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A named site, usually a government office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

impl ReferencePoint {
    pub fn new(name: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lon,
            lat,
        }
    }
}

/// Parse an ordered reference point list from a JSON array.
///
/// The first entry is the primary site. The list must be non-empty and every
/// coordinate finite.
pub fn parse_reference_points(json: &str) -> Result<Vec<ReferencePoint>, ConfigError> {
    let points: Vec<ReferencePoint> = serde_json::from_str(json)?;

    if points.is_empty() {
        return Err(ConfigError::Invalid("reference point list is empty".to_string()));
    }

    if let Some(bad) = points.iter().find(|p| !p.lon.is_finite() || !p.lat.is_finite()) {
        return Err(ConfigError::Invalid(format!(
            "reference point '{}' has non-finite coordinates",
            bad.name
        )));
    }

    Ok(points)
}

/// Load a reference point list from a JSON file.
pub fn load_reference_points(path: impl AsRef<Path>) -> Result<Vec<ReferencePoint>, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_reference_points(&data)
}
