//! Error types for the report service.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use quake_catalog::CatalogError;
use quake_core::{FlashError, ReportError};
use thiserror::Error;

/// Errors that can occur in the report service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body was not valid JSON of the expected shape.
    #[error("请求数据格式错误: {0}")]
    InvalidBody(#[from] JsonRejection),

    /// The submitted event could not be turned into a report.
    #[error("{0}")]
    Report(#[from] ReportError),

    /// The flash report fields were incomplete or invalid.
    #[error("{0}")]
    Flash(#[from] FlashError),

    /// The upstream catalog failed.
    #[error("地震数据获取失败: {0}")]
    Catalog(#[from] CatalogError),
}

impl ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            ServiceError::InvalidBody(_) | ServiceError::Report(_) | ServiceError::Flash(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::Catalog(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_client_error() {
            tracing::info!(error = %self, "Rejected input");
        } else {
            tracing::error!(error = %self, "Upstream failure");
        }

        let body = serde_json::json!({
            "error": self.to_string()
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for service handlers.
pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServiceError::from(ReportError::MissingField("EPI_LAT")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::from(FlashError::Incomplete(vec!["place"])).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ServiceError::from(CatalogError::Timeout).status(), StatusCode::BAD_GATEWAY);
        assert_eq!(ServiceError::from(CatalogError::NoEvents).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_into_response_status() {
        let response = ServiceError::from(ReportError::NoReferencePoints).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
