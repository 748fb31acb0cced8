//! CLI 命令定义

use clap::{Parser, Subcommand};

/// 考勤看板模拟后端
#[derive(Parser, Debug)]
#[command(name = "attendance-mock-server")]
#[command(version, about = "考勤看板模拟后端工具")]
#[command(propagate_version = true)]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)，覆盖配置文件
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 启动模拟 REST 服务
    ///
    /// 按配置选择内存模拟实现或转发到真实后端。
    Serve {
        /// 服务端口，默认使用配置中的 server.port
        #[arg(short, long)]
        port: Option<u16>,

        /// 启动时不写入样例数据
        #[arg(long)]
        no_seed: bool,
    },

    /// 输出样例数据（JSON）
    Fixtures {
        /// 输出文件，缺省时打印到标准输出
        #[arg(short, long)]
        output: Option<String>,
    },
}
