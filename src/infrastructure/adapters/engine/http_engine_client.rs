//! HTTP Engine Client - 调用 AivisSpeech Engine
//!
//! 实现 EnginePort trait，通过 HTTP 调用本地运行的 AivisSpeech Engine
//!
//! 引擎 API:
//! POST {base}/audio_query?speaker={style_id}&text={text}  → AudioQuery (JSON)
//! POST {base}/synthesis?speaker={style_id}  Body: AudioQuery → audio/wav binary
//! GET  {base}/speakers  → 健康探测用

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{AudioQuery, EngineError, EnginePort};

/// HTTP Engine 客户端配置
#[derive(Debug, Clone)]
pub struct HttpEngineClientConfig {
    /// 引擎基础 URL
    pub base_url: String,
    /// audio_query 请求超时时间（秒）
    pub query_timeout_secs: u64,
    /// synthesis 请求超时时间（秒）
    pub synthesis_timeout_secs: u64,
    /// 健康探测超时时间（秒）
    pub health_timeout_secs: u64,
}

impl Default for HttpEngineClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:10101".to_string(),
            query_timeout_secs: 30,
            synthesis_timeout_secs: 60,
            health_timeout_secs: 5,
        }
    }
}

impl HttpEngineClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// HTTP Engine 客户端
///
/// 无跨请求状态，两个阶段各自是一次独立的原子请求-响应。
pub struct HttpEngineClient {
    client: Client,
    config: HttpEngineClientConfig,
}

impl HttpEngineClient {
    /// 创建新的 HTTP Engine 客户端
    pub fn new(config: HttpEngineClientConfig) -> Result<Self, EngineError> {
        let client = Client::builder()
            .build()
            .map_err(|e| EngineError::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, EngineError> {
        Self::new(HttpEngineClientConfig::default())
    }

    fn audio_query_url(&self) -> String {
        format!("{}/audio_query", self.config.base_url)
    }

    fn synthesis_url(&self) -> String {
        format!("{}/synthesis", self.config.base_url)
    }

    fn speakers_url(&self) -> String {
        format!("{}/speakers", self.config.base_url)
    }

    /// reqwest 错误分类
    fn classify(e: reqwest::Error) -> EngineError {
        if e.is_timeout() {
            EngineError::Timeout
        } else if e.is_connect() {
            EngineError::Network(format!("Cannot connect to engine: {}", e))
        } else {
            EngineError::Network(e.to_string())
        }
    }

    /// 非 2xx 响应分类：4xx 视为引擎拒绝，5xx 视为引擎故障
    async fn classify_status(response: reqwest::Response) -> EngineError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_client_error() {
            EngineError::Rejected(format!("HTTP {}: {}", status, body))
        } else {
            EngineError::Network(format!("HTTP {}: {}", status, body))
        }
    }
}

#[async_trait]
impl EnginePort for HttpEngineClient {
    async fn create_audio_query(
        &self,
        text: &str,
        style_id: u32,
    ) -> Result<AudioQuery, EngineError> {
        tracing::debug!(
            url = %self.audio_query_url(),
            style_id,
            text_len = text.len(),
            "Sending audio_query request"
        );

        let response = self
            .client
            .post(self.audio_query_url())
            .query(&[("speaker", style_id.to_string()), ("text", text.to_string())])
            .timeout(Duration::from_secs(self.config.query_timeout_secs))
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            return Err(Self::classify_status(response).await);
        }

        response
            .json::<AudioQuery>()
            .await
            .map_err(|e| EngineError::InvalidResponse(format!("Failed to parse audio query: {}", e)))
    }

    async fn synthesize(&self, query: &AudioQuery, style_id: u32) -> Result<Vec<u8>, EngineError> {
        tracing::debug!(
            url = %self.synthesis_url(),
            style_id,
            speed_scale = query.speed_scale,
            "Sending synthesis request"
        );

        let response = self
            .client
            .post(self.synthesis_url())
            .query(&[("speaker", style_id.to_string())])
            .json(query)
            .timeout(Duration::from_secs(self.config.synthesis_timeout_secs))
            .send()
            .await
            .map_err(Self::classify)?;

        if !response.status().is_success() {
            return Err(Self::classify_status(response).await);
        }

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| EngineError::InvalidResponse(format!("Failed to read audio: {}", e)))?
            .to_vec();

        tracing::info!(
            style_id,
            audio_size = audio_data.len(),
            "Engine synthesis completed"
        );

        Ok(audio_data)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.speakers_url())
            .timeout(Duration::from_secs(self.config.health_timeout_secs))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = HttpEngineClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:10101");
        assert_eq!(config.query_timeout_secs, 30);
        assert_eq!(config.synthesis_timeout_secs, 60);
        assert_eq!(config.health_timeout_secs, 5);
    }

    #[test]
    fn test_config_custom_base_url() {
        let config = HttpEngineClientConfig::new("http://engine:10101");
        assert_eq!(config.base_url, "http://engine:10101");
        assert_eq!(config.query_timeout_secs, 30);
    }

    #[test]
    fn test_urls() {
        let client = HttpEngineClient::with_default_config().unwrap();
        assert_eq!(client.audio_query_url(), "http://127.0.0.1:10101/audio_query");
        assert_eq!(client.synthesis_url(), "http://127.0.0.1:10101/synthesis");
        assert_eq!(client.speakers_url(), "http://127.0.0.1:10101/speakers");
    }
}
