//! Application Layer - 应用层
//!
//! Ports: 出站端口定义
//! Synthesizer: 两阶段合成编排

pub mod error;
pub mod ports;
pub mod synthesizer;

pub use error::SynthesisError;
pub use ports::{AudioQuery, EngineError, EnginePort};
pub use synthesizer::{
    SpeechSynthesizer, SynthesisRequest, SynthesisResult, MAX_SPEED, MAX_TEXT_CHARS, MIN_SPEED,
};
