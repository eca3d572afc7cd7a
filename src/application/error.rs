//! 应用层错误定义
//!
//! 合成流程的统一错误分类

use thiserror::Error;

use crate::application::ports::EngineError;
use crate::domain::UnknownVoice;

/// 合成错误
///
/// 前两类在本地检出，不会触达引擎；后两类来自引擎调用。
/// 核心层不做重试，重试策略属于调用方。
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// 请求本身不合法（空文本、超长、语速越界）
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// voice_id 未注册
    #[error("{0}")]
    UnknownVoice(#[from] UnknownVoice),

    /// 引擎理解了请求但拒绝处理
    #[error("Engine rejected request: {0}")]
    EngineRejected(String),

    /// 引擎不可达、超时或响应不可解析（唯一值得调用方重试的类别）
    #[error("Engine unavailable: {0}")]
    EngineUnavailable(String),
}

impl From<EngineError> for SynthesisError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Rejected(msg) => SynthesisError::EngineRejected(msg),
            EngineError::Timeout => SynthesisError::EngineUnavailable("request timeout".to_string()),
            EngineError::Network(msg) | EngineError::InvalidResponse(msg) => {
                SynthesisError::EngineUnavailable(msg)
            }
        }
    }
}
