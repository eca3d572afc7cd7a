//! Application State

use std::sync::Arc;

use crate::application::ports::EnginePort;
use crate::application::SpeechSynthesizer;
use crate::domain::VoiceRegistry;

/// 应用状态
///
/// 注册表与引擎客户端都是只读共享，三个操作均不跨调用携带状态。
pub struct AppState {
    pub registry: Arc<VoiceRegistry>,
    pub synthesizer: SpeechSynthesizer,
    pub engine: Arc<dyn EnginePort>,
    /// 引擎端点 URL，health 响应中原样报告
    pub engine_endpoint: String,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        registry: Arc<VoiceRegistry>,
        engine: Arc<dyn EnginePort>,
        engine_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            synthesizer: SpeechSynthesizer::new(registry.clone(), engine.clone()),
            registry,
            engine,
            engine_endpoint: engine_endpoint.into(),
        }
    }
}
