//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ServiceError;

/// JSON request body whose rejection is reported as a [`ServiceError`], so a
/// malformed body gets the same `{"error": ...}` reply as any other bad input.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ServiceError))]
pub struct JsonBody<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;
    use quake_core::EventRecord;

    fn post(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/report")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        let req = post(
            r#"{"M":true,"O_TIME":"2024-06-01 08:00:00","EPI_LAT":"28.6","EPI_LON":"104.0"}"#,
        );
        let err = JsonBody::<EventRecord>::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidBody(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = JsonBody::<EventRecord>::from_request(post("{\"M\":"), &())
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_valid_body_passes_through() {
        let req = post(r#"{"M":"4.2","O_TIME":"2024-01-15 10:25:32"}"#);
        let JsonBody(record) = JsonBody::<EventRecord>::from_request(req, &()).await.unwrap();
        assert_eq!(record.origin_time.as_deref(), Some("2024-01-15 10:25:32"));
    }
}
