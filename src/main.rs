//! Aivisd - AivisSpeech Engine OpenAI 兼容 TTS 适配器
//!
//! - Domain: voice 注册表
//! - Application: EnginePort + 两阶段合成编排
//! - Infrastructure: http, adapters

use std::sync::Arc;

use aivisd::config::{load_config, print_config};
use aivisd::domain::VoiceRegistry;
use aivisd::infrastructure::adapters::{HttpEngineClient, HttpEngineClientConfig};
use aivisd::infrastructure::http::{AppState, HttpServer, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!(
        "{},aivisd={},tower_http=debug",
        config.log.level, config.log.level
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    tracing::info!("Aivisd - AivisSpeech OpenAI-compatible TTS adapter");
    print_config(&config);

    // 音色注册表：启动时构建一次，只读共享
    let registry = Arc::new(VoiceRegistry::builtin());
    tracing::info!(voices = registry.len(), "Voice registry initialized");

    // HTTP 引擎客户端
    let engine_config = HttpEngineClientConfig {
        base_url: config.engine.url.clone(),
        query_timeout_secs: config.engine.query_timeout_secs,
        synthesis_timeout_secs: config.engine.synthesis_timeout_secs,
        health_timeout_secs: config.engine.health_timeout_secs,
    };
    let engine = Arc::new(HttpEngineClient::new(engine_config)?);

    // 应用状态与 HTTP 服务器
    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(registry, engine, config.engine.url.clone());
    let server = HttpServer::new(server_config, state);

    tracing::info!("Starting HTTP server...");

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
