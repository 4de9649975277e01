//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use quake_catalog::DEFAULT_CATALOG_URL;

/// Report service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// JSON file holding the ordered reference point list.
    pub reference_points_path: String,
    /// JSON file holding the report settings snapshot.
    pub settings_path: String,
    /// Catalog page URL.
    pub catalog_url: String,
    /// Serve the built-in mock catalog instead of fetching.
    pub catalog_mock: bool,
    /// Directory with the browser client's static files.
    pub static_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `REPORT_ADDR` | Server bind address | `127.0.0.1:8790` |
    /// | `REFERENCE_POINTS_PATH` | Reference point list | `config/reference_points.json` |
    /// | `REPORT_SETTINGS_PATH` | Report settings | `config/report_settings.json` |
    /// | `CATALOG_URL` | Catalog page | `https://news.ceic.ac.cn/speedsearch.html` |
    /// | `CATALOG_MOCK` | Use mock catalog (`true`/`false`) | `false` |
    /// | `STATIC_DIR` | Browser client files | `static` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("REPORT_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let reference_points_path = env::var("REFERENCE_POINTS_PATH")
            .unwrap_or_else(|_| "config/reference_points.json".to_string());

        let settings_path = env::var("REPORT_SETTINGS_PATH")
            .unwrap_or_else(|_| "config/report_settings.json".to_string());

        let catalog_url = env::var("CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        let catalog_mock = match env::var("CATALOG_MOCK") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidFlag("CATALOG_MOCK"))?,
            Err(_) => false,
        };

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        Ok(Self {
            addr,
            reference_points_path,
            settings_path,
            catalog_url,
            catalog_mock,
            static_dir,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid REPORT_ADDR format")]
    InvalidAddr,

    #[error("{0} must be true or false")]
    InvalidFlag(&'static str),
}
