//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,

    /// 引擎配置
    #[serde(default)]
    pub engine: EngineConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,

    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// 获取服务器地址
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// AivisSpeech Engine 配置
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// 引擎基础 URL，启动时读取一次
    #[serde(default = "default_engine_url")]
    pub url: String,

    /// audio_query 超时时间（秒）
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,

    /// synthesis 超时时间（秒）
    #[serde(default = "default_synthesis_timeout")]
    pub synthesis_timeout_secs: u64,

    /// 健康探测超时时间（秒）
    #[serde(default = "default_health_timeout")]
    pub health_timeout_secs: u64,
}

fn default_engine_url() -> String {
    "http://127.0.0.1:10101".to_string()
}

fn default_query_timeout() -> u64 {
    30
}

fn default_synthesis_timeout() -> u64 {
    60
}

fn default_health_timeout() -> u64 {
    5
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            url: default_engine_url(),
            query_timeout_secs: default_query_timeout(),
            synthesis_timeout_secs: default_synthesis_timeout(),
            health_timeout_secs: default_health_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
