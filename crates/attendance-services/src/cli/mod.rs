//! CLI 模块
//!
//! - `serve` - 启动模拟 REST 服务
//! - `fixtures` - 导出样例数据
//!
//! # 使用示例
//!
//! ```bash
//! # 启动服务器
//! attendance-mock-server serve --port 8090
//!
//! # 启动空服务器
//! attendance-mock-server serve --no-seed
//!
//! # 导出样例数据
//! attendance-mock-server fixtures -o fixtures.json
//! ```

pub mod commands;
pub mod runner;

pub use commands::{Cli, Commands};
pub use runner::CommandRunner;
