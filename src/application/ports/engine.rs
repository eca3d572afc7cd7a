//! Engine Port - AivisSpeech Engine 抽象
//!
//! 引擎采用两阶段协议：先 audio_query 生成韵律描述，再 synthesis 渲染波形。
//! 具体实现在 infrastructure/adapters 层。

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 引擎错误
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,

    /// 引擎理解了请求但拒绝处理（HTTP 4xx）
    #[error("Engine rejected request: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Audio Query - 引擎第一阶段返回的韵律/音素描述
///
/// 仅建模本层会改写的 `speedScale` 字段，其余韵律字段原样透传给
/// synthesis 调用，不解释、不修改。单次请求内的临时值，不跨请求共享。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioQuery {
    /// 语速缩放，引擎默认 1.0
    #[serde(rename = "speedScale")]
    pub speed_scale: f64,

    /// 引擎生成的其余字段（音高、音素、间隔等），原样保留
    #[serde(flatten)]
    pub rest: serde_json::Map<String, serde_json::Value>,
}

/// Engine Port
///
/// AivisSpeech Engine 的两个能力。两次调用都以 style_id 作为
/// 引擎的 `speaker` 参数。
#[async_trait]
pub trait EnginePort: Send + Sync {
    /// 第一阶段：为 (text, style_id) 生成 AudioQuery
    async fn create_audio_query(&self, text: &str, style_id: u32)
        -> Result<AudioQuery, EngineError>;

    /// 第二阶段：根据 AudioQuery 渲染 WAV 音频
    async fn synthesize(&self, query: &AudioQuery, style_id: u32)
        -> Result<Vec<u8>, EngineError>;

    /// 检查引擎是否可达（轻量探测，不做完整合成）
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
