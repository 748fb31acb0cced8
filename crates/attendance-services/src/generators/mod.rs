//! 样例数据生成
//!
//! 为内存存储提供确定结构的开发/测试数据。

pub mod fixtures;

pub use fixtures::{mock_teacher, sample_attendances, sample_classes, sample_events};
