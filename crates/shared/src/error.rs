//! 统一错误处理模块
//!
//! 模拟服务层只有一种业务错误：记录未找到（`{status: 404, message}`）。
//! 其余变体来自真实后端的 HTTP 调用链路，使用 thiserror 提供良好的错误信息。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum AttendanceError {
    // ==================== 业务错误 ====================
    /// 与真实接口保持一致的 404 拒绝，message 形如 "Event not found"
    #[error("{message}")]
    NotFound { message: String },

    // ==================== 上游接口错误 ====================
    #[error("上游接口错误: status={status} {message}")]
    Api { status: u16, message: String },

    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("响应解析失败: {0}")]
    Decode(#[from] serde_json::Error),

    // ==================== 配置错误 ====================
    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, AttendanceError>;

/// 错误响应体
///
/// 模拟层与真实后端共用的失败形状
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl AttendanceError {
    /// 构造指定实体的未找到错误
    pub fn not_found(entity: &str) -> Self {
        Self::NotFound {
            message: format!("{entity} not found"),
        }
    }

    /// 是否为未找到错误
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// 可直接展示给用户的消息
    ///
    /// 只有后端明确返回的 message 才算，传输、解析、配置错误返回 None
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::NotFound { message } | Self::Api { message, .. } => Some(message.as_str()),
            Self::Http(_) | Self::Decode(_) | Self::Config(_) => None,
        }
    }

    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Api { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Http(_) | Self::Decode(_) => StatusCode::BAD_GATEWAY,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于日志和 API 响应）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Api { .. } => "UPSTREAM_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// 转换为对外的错误响应体
    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            Self::NotFound { message } | Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        };
        ErrorBody {
            status: self.status_code().as_u16(),
            message,
        }
    }
}

impl From<ErrorBody> for AttendanceError {
    fn from(body: ErrorBody) -> Self {
        if body.status == 404 {
            Self::NotFound {
                message: body.message,
            }
        } else {
            Self::Api {
                status: body.status,
                message: body.message,
            }
        }
    }
}

impl IntoResponse for AttendanceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "请求处理失败");
        }
        (status, Json(self.to_body())).into_response()
    }
}
