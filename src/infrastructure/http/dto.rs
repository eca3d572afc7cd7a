//! Data Transfer Objects - OpenAI 兼容 API 的请求/响应结构

use serde::{Deserialize, Serialize};

// ============================================================================
// Speech DTOs
// ============================================================================

/// OpenAI 兼容的 speech 请求
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// 要合成的文本
    pub input: String,

    /// 模型名（接受但不解释，后端始终是 AivisSpeech）
    #[serde(default = "default_model")]
    pub model: String,

    /// 音色 ID（格式 `speaker_style`，如 kohaku_normal / mao_amama）
    #[serde(default = "default_voice")]
    pub voice: String,

    /// 语速，[0.5, 2.0]，省略时为 1.0
    #[serde(default = "default_speed")]
    pub speed: f64,
}

fn default_model() -> String {
    "aivis-speech".to_string()
}

fn default_voice() -> String {
    "kohaku_normal".to_string()
}

fn default_speed() -> f64 {
    1.0
}

// ============================================================================
// Voices DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct VoiceDto {
    pub id: &'static str,
    pub name: &'static str,
    pub speaker: &'static str,
    pub style_id: u32,
}

/// `{object: "list", data: [...]}` 形状的音色列表
#[derive(Debug, Serialize)]
pub struct VoiceListResponse {
    pub object: &'static str,
    pub data: Vec<VoiceDto>,
}

// ============================================================================
// Health DTOs
// ============================================================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub provider: &'static str,
    pub endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_request_defaults() {
        let req: SpeechRequest = serde_json::from_str(r#"{"input": "こんにちは"}"#).unwrap();
        assert_eq!(req.input, "こんにちは");
        assert_eq!(req.model, "aivis-speech");
        assert_eq!(req.voice, "kohaku_normal");
        assert_eq!(req.speed, 1.0);
    }

    #[test]
    fn test_speech_request_explicit_fields() {
        let req: SpeechRequest = serde_json::from_str(
            r#"{"input": "テスト", "model": "tts-1", "voice": "mao_amama", "speed": 1.5}"#,
        )
        .unwrap();
        assert_eq!(req.model, "tts-1");
        assert_eq!(req.voice, "mao_amama");
        assert_eq!(req.speed, 1.5);
    }
}
