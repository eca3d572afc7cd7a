//! Infrastructure Layer - 基础设施层
//!
//! HTTP: OpenAI 兼容 API
//! Adapters: AivisSpeech Engine 客户端实现

pub mod adapters;
pub mod http;
