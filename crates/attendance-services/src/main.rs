//! 考勤看板模拟后端入口

use clap::Parser;

use attendance_services::cli::{Cli, CommandRunner, Commands};
use attendance_shared::config::AppConfig;
use attendance_shared::observability;

const SERVICE_NAME: &str = "attendance-mock-server";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(SERVICE_NAME)?;
    // 命令行日志级别覆盖配置，RUST_LOG 仍然优先
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    observability::init(SERVICE_NAME, &config.observability)?;

    let runner = CommandRunner::new(config);

    match cli.command {
        Commands::Serve { port, no_seed } => runner.run_serve(port, no_seed).await?,
        Commands::Fixtures { output } => runner.run_fixtures(output)?,
    }

    Ok(())
}
