mod fake_engine_client;
mod http_engine_client;

pub use fake_engine_client::FakeEngineClient;
pub use http_engine_client::{HttpEngineClient, HttpEngineClientConfig};
