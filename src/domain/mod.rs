//! Domain Layer - 领域层
//!
//! Voice Context: 音色注册表

pub mod voice;

pub use voice::{UnknownVoice, VoiceEntry, VoiceRegistry};
