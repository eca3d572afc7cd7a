//! Speech Handler
//!
//! POST /api/v1/audio/speech - OpenAI 兼容的合成端点，返回 WAV 二进制

use axum::{
    extract::State,
    http::{header, HeaderName},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::application::SynthesisRequest;
use crate::infrastructure::http::dto::SpeechRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

static X_MODEL_USED: HeaderName = HeaderName::from_static("x-model-used");
static X_VOICE_USED: HeaderName = HeaderName::from_static("x-voice-used");

/// 合成语音
///
/// `model` 字段接受但不解释；音频字节原样作为响应体返回。
pub async fn create_speech(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SpeechRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        voice = %req.voice,
        model = %req.model,
        input_chars = req.input.chars().count(),
        speed = req.speed,
        "TTS request"
    );

    let result = state
        .synthesizer
        .synthesize(SynthesisRequest {
            text: req.input,
            voice_id: req.voice.clone(),
            speed: req.speed,
        })
        .await?;

    let headers = [
        (header::CONTENT_TYPE, result.content_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"speech_{}.wav\"", req.voice),
        ),
        (X_MODEL_USED.clone(), "aivis-speech".to_string()),
        (X_VOICE_USED.clone(), req.voice),
    ];

    Ok((headers, result.audio_bytes))
}
