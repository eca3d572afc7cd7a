//! HTTP Routes
//!
//! API Endpoints:
//! - /api/v1/audio/speech   POST  OpenAI 兼容合成（返回 WAV 二进制）
//! - /api/v1/audio/voices   GET   列出可用音色
//! - /api/v1/audio/health   GET   引擎可达性探测

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api/v1/audio", audio_routes())
}

/// Audio 路由
fn audio_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/speech", post(handlers::create_speech))
        .route("/voices", get(handlers::list_voices))
        .route("/health", get(handlers::health))
}
