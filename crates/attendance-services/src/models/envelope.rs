//! 真实后端使用的响应包装
//!
//! 班级与教师接口把数据包在 `data` 中，班级列表额外带分页信息。

use serde::{Deserialize, Serialize};

/// 操作确认 `{success: true}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

impl Ack {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// 分页响应
///
/// 模拟层不做分页，始终返回单页
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub limit: usize,
    pub total: usize,
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn single(data: Vec<T>) -> Self {
        let total = data.len();
        Self {
            data,
            page: 1,
            limit: total,
            total,
            total_pages: 1,
        }
    }
}
