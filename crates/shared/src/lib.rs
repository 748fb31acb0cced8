//! 共享库
//!
//! 包含考勤服务层共用的配置、错误处理与日志初始化代码。

pub mod config;
pub mod error;
pub mod observability;

pub use error::{AttendanceError, ErrorBody, Result};
