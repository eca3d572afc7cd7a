//! HTTP Error Handling
//!
//! 内部错误到边界错误形状的唯一转换点。
//! 错误响应体为 OpenAI 风格：`{"error": {"message": ..., "type": ...}}`，
//! 内部错误类型不会未经转换跨越边界。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::SynthesisError;

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: &'static str,
}

impl ErrorResponse {
    pub fn new(error_type: &'static str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                error_type,
            },
        }
    }
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    /// 调用方输入不合法（空文本、语速越界、voice_id 未注册）
    InvalidRequest(String),
    /// 引擎拒绝了请求
    EngineRejected(String),
    /// 引擎不可达或超时
    EngineUnavailable(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) | ApiError::EngineRejected(_) => StatusCode::BAD_REQUEST,
            ApiError::EngineUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "invalid_request_error",
            ApiError::EngineRejected(_) => "engine_rejected",
            ApiError::EngineUnavailable(_) => "engine_unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = (self.status(), self.error_type());
        let message = match &self {
            ApiError::InvalidRequest(msg)
            | ApiError::EngineRejected(msg)
            | ApiError::EngineUnavailable(msg) => msg.clone(),
        };

        if status.is_server_error() {
            tracing::error!(error_type, error = %message, "TTS request failed");
        } else {
            tracing::warn!(error_type, error = %message, "TTS request rejected");
        }

        (status, Json(ErrorResponse::new(error_type, message))).into_response()
    }
}

impl From<SynthesisError> for ApiError {
    fn from(e: SynthesisError) -> Self {
        match e {
            SynthesisError::InvalidRequest(msg) => ApiError::InvalidRequest(msg),
            SynthesisError::UnknownVoice(err) => ApiError::InvalidRequest(err.to_string()),
            SynthesisError::EngineRejected(msg) => ApiError::EngineRejected(msg),
            SynthesisError::EngineUnavailable(msg) => ApiError::EngineUnavailable(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UnknownVoice;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let err: ApiError = SynthesisError::InvalidRequest("empty".to_string()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_type(), "invalid_request_error");
    }

    #[test]
    fn test_unknown_voice_maps_to_400_and_names_id() {
        let err: ApiError = SynthesisError::UnknownVoice(UnknownVoice("ghost".to_string())).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        match err {
            ApiError::InvalidRequest(msg) => assert!(msg.contains("ghost")),
            other => panic!("Expected InvalidRequest, got: {:?}", other),
        }
    }

    #[test]
    fn test_engine_unavailable_maps_to_503() {
        let err: ApiError = SynthesisError::EngineUnavailable("down".to_string()).into();
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.error_type(), "engine_unavailable");
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::new("invalid_request_error", "oops");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["message"], "oops");
        assert_eq!(json["error"]["type"], "invalid_request_error");
    }
}
