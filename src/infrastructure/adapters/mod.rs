//! Engine Adapter - AivisSpeech Engine 客户端实现

mod engine;

pub use engine::{FakeEngineClient, HttpEngineClient, HttpEngineClientConfig};
