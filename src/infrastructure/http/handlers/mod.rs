//! HTTP Handlers

mod health;
mod speech;
mod voices;

pub use health::health;
pub use speech::create_speech;
pub use voices::list_voices;
