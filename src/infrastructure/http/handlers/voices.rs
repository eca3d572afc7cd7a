//! Voices Handler
//!
//! GET /api/v1/audio/voices - 列出注册表内全部音色

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{VoiceDto, VoiceListResponse};
use crate::infrastructure::http::state::AppState;

/// 列出可用音色（注册表顺序）
pub async fn list_voices(State(state): State<Arc<AppState>>) -> Json<VoiceListResponse> {
    let data = state
        .registry
        .list_voices()
        .iter()
        .map(|e| VoiceDto {
            id: e.voice_id,
            name: e.style_label,
            speaker: e.speaker_name,
            style_id: e.style_id,
        })
        .collect();

    Json(VoiceListResponse {
        object: "list",
        data,
    })
}
