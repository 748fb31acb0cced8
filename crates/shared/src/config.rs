//! 配置管理模块
//!
//! TOML 配置文件加上 ATTENDANCE_ 环境变量覆盖，决定监听地址、后端选择与模拟延迟。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

/// 后端接口配置
///
/// `use_mocks` 在启动时读取一次，决定整个进程使用内存模拟实现还是真实 HTTP 实现
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub use_mocks: bool,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            use_mocks: true,
            base_url: "http://localhost:3000/api".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl ApiConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// 模拟后端配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// 业务接口的模拟延迟（毫秒）
    pub latency_ms: u64,
    /// 登录接口的模拟延迟（毫秒）
    pub login_latency_ms: u64,
    /// 登出、获取当前教师接口的模拟延迟（毫秒）
    pub session_latency_ms: u64,
    /// 启动时是否写入样例数据
    pub seed_on_start: bool,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: 80,
            login_latency_ms: 100,
            session_latency_ms: 50,
            seed_on_start: true,
        }
    }
}

impl MockConfig {
    pub fn service_latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn login_latency(&self) -> Duration {
        Duration::from_millis(self.login_latency_ms)
    }

    pub fn session_latency(&self) -> Duration {
        Duration::from_millis(self.session_latency_ms)
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub log_level: String,
    /// 是否启用 JSON 格式日志
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub api: ApiConfig,
    pub mock: MockConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. .env 文件（若存在，写入进程环境变量）
    /// 2. config/default.toml（默认配置）
    /// 3. config/{environment}.toml（环境特定配置）
    /// 4. 环境变量（ATTENDANCE_ 前缀，层级用双下划线，如 ATTENDANCE_API__USE_MOCKS -> api.use_mocks）
    /// 5. 服务端口环境变量（如 ATTENDANCE_MOCK_SERVER_PORT）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("ATTENDANCE_ENV").unwrap_or_else(|_| "development".to_string());
        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{env}.toml"))).required(false),
            )
            .add_source(
                Environment::with_prefix("ATTENDANCE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if let Some(port) = Self::service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 服务端口环境变量
    ///
    /// 将 "attendance-mock-server" 转换为 "ATTENDANCE_MOCK_SERVER_PORT"
    fn service_port_from_env(service_name: &str) -> Option<u16> {
        std::env::var(Self::port_env_var(service_name))
            .ok()
            .and_then(|v| v.parse().ok())
    }

    fn port_env_var(service_name: &str) -> String {
        format!("{}_PORT", service_name.to_uppercase().replace('-', "_"))
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
