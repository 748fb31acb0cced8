//! 命令执行器
//!
//! 将命令行参数与已加载的配置合并，执行具体命令。

use std::fs;
use std::io::Write as _;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

use attendance_shared::config::AppConfig;

use crate::registry::{BackendKind, ServiceRegistry};
use crate::routes::build_router;
use crate::store::MockStore;

pub struct CommandRunner {
    config: AppConfig,
}

impl CommandRunner {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 执行 serve 命令
    pub async fn run_serve(&self, port: Option<u16>, no_seed: bool) -> Result<()> {
        let mut config = self.config.clone();
        if let Some(port) = port {
            config.server.port = port;
        }
        if no_seed {
            config.mock.seed_on_start = false;
        }

        let registry = ServiceRegistry::from_config(&config.api, &config.mock)
            .context("初始化后端服务失败")?;
        let backend = registry.kind();
        let app = build_router(Arc::new(registry));

        let addr = config.server_addr();
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("绑定地址失败: {addr}"))?;

        info!(%addr, %backend, environment = %config.environment, "模拟后端已启动");
        if backend == BackendKind::Http {
            info!(base_url = %config.api.base_url, "请求将转发到真实后端");
        } else {
            info!(seeded = config.mock.seed_on_start, "使用内存数据");
            if config.is_production() {
                warn!("生产环境正在使用内存模拟后端，请检查 api.use_mocks");
            }
        }
        info!("按 Ctrl+C 停止服务");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("服务器运行失败")?;

        info!("模拟后端已停止");
        Ok(())
    }

    /// 执行 fixtures 命令
    ///
    /// 输出一份新写入样例数据的存储快照
    pub fn run_fixtures(&self, output: Option<String>) -> Result<()> {
        let store = MockStore::seeded(Utc::now());
        let snapshot = store.snapshot();
        let json = serde_json::to_string_pretty(&snapshot).context("序列化样例数据失败")?;

        match output {
            Some(path) => {
                let mut file = fs::File::create(&path)
                    .with_context(|| format!("创建输出文件失败: {path}"))?;
                file.write_all(json.as_bytes()).context("写入文件失败")?;
                info!(
                    path = %path,
                    events = snapshot.events.len(),
                    attendances = snapshot.attendances.len(),
                    classes = snapshot.classes.len(),
                    "样例数据已输出到文件"
                );
            }
            None => println!("{json}"),
        }

        Ok(())
    }
}

/// 等待关闭信号
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("收到关闭信号，正在停止服务..."),
        Err(e) => error!(error = %e, "安装 CTRL+C 信号处理器失败"),
    }
}
