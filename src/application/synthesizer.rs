//! Speech Synthesizer - 两阶段合成编排
//!
//! 校验请求 → 解析音色 → audio_query → 改写 speedScale → synthesis。
//! 两次引擎调用在单个请求内严格顺序执行（第二次的输入是第一次的输出），
//! 但请求之间互不串行，无跨请求共享可变状态。

use std::sync::Arc;

use crate::application::error::SynthesisError;
use crate::application::ports::EnginePort;
use crate::domain::VoiceRegistry;

/// 语速下界（含）
pub const MIN_SPEED: f64 = 0.5;
/// 语速上界（含）
pub const MAX_SPEED: f64 = 2.0;
/// 输入文本最大字符数
pub const MAX_TEXT_CHARS: usize = 5000;

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 音色 ID（格式 `speaker_style`）
    pub voice_id: String,
    /// 语速，[0.5, 2.0]
    pub speed: f64,
}

/// 合成结果
///
/// 音频字节原样透传自引擎，不做任何后处理或重编码。
#[derive(Debug, Clone)]
pub struct SynthesisResult {
    pub audio_bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Speech Synthesizer
pub struct SpeechSynthesizer {
    registry: Arc<VoiceRegistry>,
    engine: Arc<dyn EnginePort>,
}

impl SpeechSynthesizer {
    pub fn new(registry: Arc<VoiceRegistry>, engine: Arc<dyn EnginePort>) -> Self {
        Self { registry, engine }
    }

    /// 执行一次合成
    ///
    /// 校验与音色解析失败时不触达引擎。引擎错误原样分类上抛，不重试。
    pub async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesisResult, SynthesisError> {
        validate_request(&request)?;

        let entry = self.registry.resolve(&request.voice_id)?;

        tracing::info!(
            voice_id = %entry.voice_id,
            style_id = entry.style_id,
            text_chars = request.text.chars().count(),
            speed = request.speed,
            "Synthesizing speech"
        );

        // 第一阶段：生成 AudioQuery
        let mut query = self
            .engine
            .create_audio_query(&request.text, entry.style_id)
            .await?;

        // 仅改写语速，其余韵律字段保持引擎计算的原值
        query.speed_scale = request.speed;

        // 第二阶段：渲染波形
        let audio_bytes = self.engine.synthesize(&query, entry.style_id).await?;

        tracing::info!(
            voice_id = %entry.voice_id,
            audio_size = audio_bytes.len(),
            "Synthesis completed"
        );

        Ok(SynthesisResult {
            audio_bytes,
            content_type: "audio/wav",
        })
    }
}

/// 请求形状校验
fn validate_request(request: &SynthesisRequest) -> Result<(), SynthesisError> {
    if request.text.trim().is_empty() {
        return Err(SynthesisError::InvalidRequest(
            "Input text cannot be empty".to_string(),
        ));
    }

    if request.text.chars().count() > MAX_TEXT_CHARS {
        return Err(SynthesisError::InvalidRequest(format!(
            "Input text too long (max {} characters)",
            MAX_TEXT_CHARS
        )));
    }

    // NaN 也会落入这个分支
    if !(MIN_SPEED..=MAX_SPEED).contains(&request.speed) {
        return Err(SynthesisError::InvalidRequest(format!(
            "Speed must be between {} and {}, got {}",
            MIN_SPEED, MAX_SPEED, request.speed
        )));
    }

    Ok(())
}
