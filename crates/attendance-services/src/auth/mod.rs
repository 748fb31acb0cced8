//! 登录身份与会话
//!
//! `IdentityStore` 保存当前教师、登录状态和最近一次错误；
//! `AuthSession` 通过 `AuthApi` 驱动它完成登录、登出和恢复会话。

use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use attendance_shared::Result;

use crate::api::AuthApi;
use crate::models::{LoginRequest, Teacher};

/// 后端没有给出 message 时记录的登录失败提示
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq)]
struct IdentityState {
    teacher: Option<Teacher>,
    is_authenticated: bool,
    error: Option<String>,
}

/// 当前登录身份
#[derive(Debug, Default)]
pub struct IdentityStore {
    state: RwLock<IdentityState>,
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, teacher: Teacher) {
        *self.state.write() = IdentityState {
            teacher: Some(teacher),
            is_authenticated: true,
            error: None,
        };
    }

    pub fn sign_out(&self) {
        *self.state.write() = IdentityState::default();
    }

    /// 记录失败原因并清除身份
    pub fn fail(&self, message: impl Into<String>) {
        *self.state.write() = IdentityState {
            teacher: None,
            is_authenticated: false,
            error: Some(message.into()),
        };
    }

    pub fn clear_error(&self) {
        self.state.write().error = None;
    }

    pub fn current_teacher(&self) -> Option<Teacher> {
        self.state.read().teacher.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }
}

/// 认证会话
#[derive(Clone)]
pub struct AuthSession {
    api: Arc<dyn AuthApi>,
    identity: Arc<IdentityStore>,
}

impl AuthSession {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self {
            api,
            identity: Arc::new(IdentityStore::new()),
        }
    }

    pub fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// 登录；失败时记录错误并保持未登录，错误原样返回
    pub async fn login(&self, email: &str, password: &str) -> Result<Teacher> {
        match self.api.login(LoginRequest::new(email, password)).await {
            Ok(response) => {
                info!(teacher_id = %response.teacher.id, "登录成功");
                self.identity.sign_in(response.teacher.clone());
                Ok(response.teacher)
            }
            Err(e) => {
                warn!(email = %email, error = %e, "登录失败");
                self.identity
                    .fail(e.user_message().unwrap_or(LOGIN_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    /// 登出；无论后端是否成功都清除本地身份
    pub async fn logout(&self) -> Result<()> {
        let result = self.api.logout().await;
        self.identity.sign_out();
        if let Err(e) = &result {
            warn!(error = %e, "登出请求失败");
        }
        result
    }

    /// 用现有凭据恢复会话；失败时清除身份
    pub async fn load_user(&self) -> Result<Teacher> {
        match self.api.me().await {
            Ok(teacher) => {
                self.identity.sign_in(teacher.clone());
                Ok(teacher)
            }
            Err(e) => {
                warn!(error = %e, "恢复会话失败");
                self.identity.sign_out();
                Err(e)
            }
        }
    }

    pub fn clear_error(&self) {
        self.identity.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockAuthApi;
    use crate::generators::mock_teacher;
    use crate::models::LoginResponse;
    use attendance_shared::AttendanceError;
    use chrono::Utc;

    fn session(api: MockAuthApi) -> AuthSession {
        AuthSession::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_login_signs_in() {
        let teacher = mock_teacher(Utc::now());
        let expected = teacher.clone();

        let mut api = MockAuthApi::new();
        api.expect_login()
            .withf(|req| req.email == "prof@example.com")
            .times(1)
            .returning(move |_| {
                Ok(LoginResponse {
                    teacher: teacher.clone(),
                    message: "ok".to_string(),
                })
            });

        let session = session(api);
        let logged = session.login("prof@example.com", "secret").await.unwrap();

        assert_eq!(logged, expected);
        assert!(session.identity().is_authenticated());
        assert_eq!(session.identity().current_teacher(), Some(expected));
        assert!(session.identity().error().is_none());
    }

    #[tokio::test]
    async fn test_login_failure_records_error() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_| {
            Err(AttendanceError::Api {
                status: 401,
                message: "Invalid credentials".to_string(),
            })
        });

        let session = session(api);
        let err = session.login("prof@example.com", "wrong").await.unwrap_err();

        assert_eq!(err.status_code(), 401);
        assert!(!session.identity().is_authenticated());
        assert!(session.identity().current_teacher().is_none());
        assert_eq!(
            session.identity().error().as_deref(),
            Some("Invalid credentials")
        );

        session.clear_error();
        assert!(session.identity().error().is_none());
    }

    #[tokio::test]
    async fn test_login_decode_failure_uses_generic_message() {
        let mut api = MockAuthApi::new();
        api.expect_login().returning(|_| {
            Err(AttendanceError::from(
                serde_json::from_str::<u32>("<html>").unwrap_err(),
            ))
        });

        let session = session(api);
        let err = session.login("prof@example.com", "secret").await.unwrap_err();

        assert_eq!(err.error_code(), "DECODE_ERROR");
        assert!(!session.identity().is_authenticated());
        assert_eq!(
            session.identity().error().as_deref(),
            Some(LOGIN_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_logout_clears_identity() {
        let teacher = mock_teacher(Utc::now());
        let mut api = MockAuthApi::new();
        api.expect_logout().times(1).returning(|| Ok(()));

        let session = session(api);
        session.identity().sign_in(teacher);
        session.logout().await.unwrap();

        assert!(!session.identity().is_authenticated());
        assert!(session.identity().current_teacher().is_none());
    }

    #[tokio::test]
    async fn test_load_user_failure_clears_identity() {
        let mut api = MockAuthApi::new();
        api.expect_me()
            .returning(|| Err(AttendanceError::not_found("Teacher")));

        let session = session(api);
        session.identity().sign_in(mock_teacher(Utc::now()));

        assert!(session.load_user().await.is_err());
        assert!(!session.identity().is_authenticated());
    }

    #[tokio::test]
    async fn test_load_user_restores_identity() {
        let teacher = mock_teacher(Utc::now());
        let expected = teacher.clone();
        let mut api = MockAuthApi::new();
        api.expect_me().returning(move || Ok(teacher.clone()));

        let session = session(api);
        session.load_user().await.unwrap();

        assert_eq!(session.identity().current_teacher(), Some(expected));
    }
}
