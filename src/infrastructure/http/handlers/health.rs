//! Health Handler
//!
//! GET /api/v1/audio/health - 引擎可达性探测
//!
//! 永不报错：引擎不可达是正常输出（status = "unhealthy"），
//! 调用方用它做监控/展示，不做控制流。

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::HealthResponse;
use crate::infrastructure::http::state::AppState;

/// 健康检查
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let is_healthy = state.engine.health_check().await;

    Json(HealthResponse {
        status: if is_healthy { "healthy" } else { "unhealthy" },
        provider: "aivis-speech",
        endpoint: state.engine_endpoint.clone(),
    })
}
