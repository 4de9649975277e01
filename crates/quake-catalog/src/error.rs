//! Error types for catalog operations.

use thiserror::Error;

/// Errors that can occur while fetching or parsing the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request did not complete in time.
    #[error("请求超时，请检查网络连接")]
    Timeout,

    /// The catalog page does not exist.
    #[error("地震数据源不可用")]
    SourceUnavailable,

    /// The catalog server failed.
    #[error("地震数据服务器错误 (status {0})")]
    ServerError(u16),

    /// Any other non-success status.
    #[error("Catalog returned status {0}")]
    Status(u16),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The page was fetched but contained no events.
    #[error("未能从页面中提取到地震数据")]
    NoEvents,
}
