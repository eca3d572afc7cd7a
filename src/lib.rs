//! Aivisd - AivisSpeech Engine OpenAI 兼容 TTS 适配器
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Voice Context: 音色注册表（voice_id → speaker/style 映射）
//!
//! 应用层 (application/):
//! - Ports: 端口定义（EnginePort）
//! - Synthesizer: 两阶段合成编排（audio_query → synthesis）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: OpenAI 兼容 RESTful API（speech / voices / health）
//! - Adapters: AivisSpeech Engine HTTP 客户端 + 测试用 Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
