//! Flash report routes.

use axum::extract::State;
use axum::Json;
use quake_core::flash::DEFAULT_HEADER;
use quake_core::{build_assessment, parse_flash_text, FlashFields};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Pasted bulletin text, optionally with what the form already holds.
#[derive(Deserialize)]
pub struct ParseRequest {
    pub text: String,
    #[serde(default)]
    pub current: Option<FlashFields>,
}

/// Request to build an assessment message.
#[derive(Deserialize)]
pub struct AssessmentRequest {
    pub fields: FlashFields,
    #[serde(default)]
    pub header: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub text: String,
}

/// Extract event fields from pasted text.
pub async fn parse_api(JsonBody(req): JsonBody<ParseRequest>) -> Json<FlashFields> {
    let parsed = parse_flash_text(&req.text);
    let fields = match req.current {
        Some(current) => current.merged_with(parsed),
        None => parsed,
    };
    Json(fields)
}

/// Build the assessment message for the given fields.
pub async fn assessment_api(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>> {
    let header = req.header.as_deref().unwrap_or(DEFAULT_HEADER);
    let text = build_assessment(&req.fields, &state.points, &state.settings, header)?;
    Ok(Json(AssessmentResponse { text }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::state::CatalogSource;
    use quake_core::{FlashError, ReferencePoint, ReportSettings};

    const TEXT: &str = "中国地震台网正式测定：2025年10月11日11时18分15秒在四川宜宾市筠连县（北纬28.10度，东经104.56度）发生4.3级地震，震源深度10公里。";

    fn state() -> AppState {
        AppState::new(
            vec![ReferencePoint::new("绥江县政府", 103.9668967771, 28.5956549725)],
            ReportSettings::default(),
            CatalogSource::Mock,
        )
    }

    #[tokio::test]
    async fn test_parse_keeps_current_values() {
        let current = FlashFields {
            depth_km: Some(7.0),
            ..Default::default()
        };
        let Json(fields) = parse_api(JsonBody(ParseRequest {
            text: "在昭通市发生3.1级地震".to_string(),
            current: Some(current),
        }))
        .await;
        assert_eq!(fields.depth_km, Some(7.0));
        assert_eq!(fields.magnitude, Some(3.1));
    }

    #[tokio::test]
    async fn test_assessment_with_custom_header() {
        let req = AssessmentRequest {
            fields: parse_flash_text(TEXT),
            header: Some("【测试】".to_string()),
        };
        let Json(response) = assessment_api(State(state()), JsonBody(req)).await.unwrap();
        assert!(response.text.starts_with("【测试】\n据中国地震台网正式测定："));
        assert!(response.text.contains("\n\n震中到绥江县政府距离"));
    }

    #[tokio::test]
    async fn test_assessment_incomplete() {
        let req = AssessmentRequest {
            fields: FlashFields::default(),
            header: None,
        };
        let err = assessment_api(State(state()), JsonBody(req)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Flash(FlashError::Incomplete(_))));
    }
}
