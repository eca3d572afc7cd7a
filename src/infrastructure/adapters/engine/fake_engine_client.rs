//! Fake Engine Client - 用于测试的引擎客户端
//!
//! 始终返回固定的 AudioQuery 和固定的音频字节，不实际调用引擎。
//! 记录调用次数和最后一次 synthesis 收到的 query，供测试断言
//! 「未触达引擎」与「speedScale 已改写」。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::application::ports::{AudioQuery, EngineError, EnginePort};

/// Fake Engine Client
pub struct FakeEngineClient {
    /// 固定返回的音频数据
    audio_data: Vec<u8>,
    /// 模拟引擎不可达
    reachable: bool,
    query_calls: AtomicUsize,
    synthesis_calls: AtomicUsize,
    last_synthesis_query: Mutex<Option<AudioQuery>>,
    last_style_id: Mutex<Option<u32>>,
}

impl FakeEngineClient {
    /// 创建返回固定音频的 Fake 客户端
    pub fn new(audio_data: Vec<u8>) -> Self {
        Self {
            audio_data,
            reachable: true,
            query_calls: AtomicUsize::new(0),
            synthesis_calls: AtomicUsize::new(0),
            last_synthesis_query: Mutex::new(None),
            last_style_id: Mutex::new(None),
        }
    }

    /// 创建模拟不可达的 Fake 客户端
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            ..Self::new(Vec::new())
        }
    }

    /// 引擎第一阶段返回的固定 AudioQuery（speedScale 为引擎默认值 1.0）
    pub fn fixed_query() -> AudioQuery {
        let rest = json!({
            "pitchScale": 0.0,
            "volumeScale": 1.0,
            "outputSamplingRate": 44100,
            "accent_phrases": []
        });
        AudioQuery {
            speed_scale: 1.0,
            rest: match rest {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            },
        }
    }

    /// audio_query 被调用的次数
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// synthesis 被调用的次数
    pub fn synthesis_calls(&self) -> usize {
        self.synthesis_calls.load(Ordering::SeqCst)
    }

    /// 最后一次 synthesis 收到的 AudioQuery
    pub fn last_synthesis_query(&self) -> Option<AudioQuery> {
        self.last_synthesis_query.lock().unwrap().clone()
    }

    /// 最后一次调用携带的 style_id
    pub fn last_style_id(&self) -> Option<u32> {
        *self.last_style_id.lock().unwrap()
    }
}

#[async_trait]
impl EnginePort for FakeEngineClient {
    async fn create_audio_query(
        &self,
        text: &str,
        style_id: u32,
    ) -> Result<AudioQuery, EngineError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_style_id.lock().unwrap() = Some(style_id);

        if !self.reachable {
            return Err(EngineError::Network(
                "engine unreachable (simulated)".to_string(),
            ));
        }

        tracing::debug!(
            text_len = text.len(),
            style_id,
            "FakeEngineClient: returning fixed audio query"
        );

        Ok(Self::fixed_query())
    }

    async fn synthesize(&self, query: &AudioQuery, style_id: u32) -> Result<Vec<u8>, EngineError> {
        self.synthesis_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_synthesis_query.lock().unwrap() = Some(query.clone());
        *self.last_style_id.lock().unwrap() = Some(style_id);

        if !self.reachable {
            return Err(EngineError::Network(
                "engine unreachable (simulated)".to_string(),
            ));
        }

        Ok(self.audio_data.clone())
    }

    async fn health_check(&self) -> bool {
        self.reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_returns_fixed_audio() {
        let fake = FakeEngineClient::new(b"fixed".to_vec());
        let query = fake.create_audio_query("テスト", 42).await.unwrap();
        let audio = fake.synthesize(&query, 42).await.unwrap();

        assert_eq!(audio, b"fixed");
        assert_eq!(fake.query_calls(), 1);
        assert_eq!(fake.synthesis_calls(), 1);
        assert_eq!(fake.last_style_id(), Some(42));
    }

    #[tokio::test]
    async fn test_unreachable_fake_fails_and_reports_unhealthy() {
        let fake = FakeEngineClient::unreachable();
        assert!(fake.create_audio_query("テスト", 1).await.is_err());
        assert!(!fake.health_check().await);
    }
}
