//! HTTP client for the CEIC catalog page.

use std::time::Duration;

use quake_core::EventRecord;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::entry::CatalogEntry;
use crate::error::CatalogError;
use crate::parse::parse_catalog;

/// Public CEIC quick-search page.
pub const DEFAULT_CATALOG_URL: &str = "https://news.ceic.ac.cn/speedsearch.html";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const HTML_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Fetches the latest events from the catalog page.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    /// Create a client for the given catalog page URL.
    pub fn new(url: impl Into<String>) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(HTML_ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("zh-CN,zh;q=0.9,en;q=0.8"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// The catalog page URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the raw catalog page.
    pub async fn fetch_html(&self) -> Result<String, CatalogError> {
        debug!(url = %self.url, "Fetching catalog page");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            warn!(error = %e, "Catalog request failed");
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Http(e)
            }
        })?;

        check_status(response.status())?;

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::Http(e)
            }
        })?;
        Ok(body)
    }

    /// Fetch and parse the latest event records.
    pub async fn latest_records(&self) -> Result<Vec<EventRecord>, CatalogError> {
        let html = self.fetch_html().await?;
        parse_catalog(&html)
    }

    /// Fetch the latest events as listing entries.
    pub async fn latest_entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        let records = self.latest_records().await?;
        Ok(records
            .iter()
            .map(|r| CatalogEntry::from_record(r, &self.url))
            .collect())
    }
}

/// Map a response status to a catalog error.
pub fn check_status(status: StatusCode) -> Result<(), CatalogError> {
    if status.is_success() {
        Ok(())
    } else if status == StatusCode::NOT_FOUND {
        Err(CatalogError::SourceUnavailable)
    } else if status.is_server_error() {
        Err(CatalogError::ServerError(status.as_u16()))
    } else {
        Err(CatalogError::Status(status.as_u16()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_status() {
        assert!(check_status(StatusCode::OK).is_ok());
        assert!(matches!(
            check_status(StatusCode::NOT_FOUND),
            Err(CatalogError::SourceUnavailable)
        ));
        assert!(matches!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(CatalogError::ServerError(502))
        ));
        assert!(matches!(
            check_status(StatusCode::FORBIDDEN),
            Err(CatalogError::Status(403))
        ));
    }

    #[test]
    fn test_client_keeps_url() {
        let client = CatalogClient::new(DEFAULT_CATALOG_URL).unwrap();
        assert_eq!(client.url(), "https://news.ceic.ac.cn/speedsearch.html");
    }
}
