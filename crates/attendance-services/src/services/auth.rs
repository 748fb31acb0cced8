//! 内存认证服务
//!
//! 任意凭据都会登录为固定的模拟教师。

use async_trait::async_trait;
use tracing::info;

use attendance_shared::Result;

use crate::api::AuthApi;
use crate::clock::Latency;
use crate::generators::mock_teacher;
use crate::models::{
    LoginRequest, LoginResponse, RecoverPasswordRequest, RecoverPasswordResponse, Teacher,
};

pub const LOGIN_MESSAGE: &str = "Login successful";

/// 模拟认证服务
#[derive(Debug, Clone)]
pub struct MockAuthService {
    teacher: Teacher,
    login_latency: Latency,
    session_latency: Latency,
}

impl MockAuthService {
    pub fn new(login_latency: Latency, session_latency: Latency) -> Self {
        Self {
            teacher: mock_teacher(login_latency.now()),
            login_latency,
            session_latency,
        }
    }
}

#[async_trait]
impl AuthApi for MockAuthService {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        self.login_latency.wait().await;

        info!(email = %request.email, teacher_id = %self.teacher.id, "模拟登录");
        Ok(LoginResponse {
            teacher: self.teacher.clone(),
            message: LOGIN_MESSAGE.to_string(),
        })
    }

    async fn logout(&self) -> Result<()> {
        self.session_latency.wait().await;
        info!(teacher_id = %self.teacher.id, "模拟登出");
        Ok(())
    }

    async fn me(&self) -> Result<Teacher> {
        self.session_latency.wait().await;
        Ok(self.teacher.clone())
    }

    async fn recover_password(
        &self,
        request: RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse> {
        self.session_latency.wait().await;

        info!(teacher_email = %request.teacher_email, "模拟发送找回密码邮件");
        Ok(RecoverPasswordResponse {
            status: "sent".to_string(),
            teacher_email: request.teacher_email,
            sent_at: self.session_latency.now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SystemClock;
    use crate::generators::fixtures::MOCK_TEACHER_ID;
    use crate::services::test_support::instant_latency;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_login_accepts_any_credentials() {
        let svc = MockAuthService::new(instant_latency(), instant_latency());
        let response = svc
            .login(LoginRequest::new("qualquer@example.com", "x"))
            .await
            .unwrap();

        assert_eq!(response.teacher.id, MOCK_TEACHER_ID);
        assert_eq!(response.message, LOGIN_MESSAGE);
        assert_eq!(svc.me().await.unwrap(), response.teacher);
    }

    #[tokio::test]
    async fn test_recover_password_echoes_email() {
        let svc = MockAuthService::new(instant_latency(), instant_latency());
        let response = svc
            .recover_password(RecoverPasswordRequest {
                teacher_email: "prof@example.com".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.status, "sent");
        assert_eq!(response.teacher_email, "prof@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_and_session_latencies() {
        let clock = Arc::new(SystemClock);
        let svc = MockAuthService::new(
            Latency::new(clock.clone(), Duration::from_millis(100)),
            Latency::new(clock, Duration::from_millis(50)),
        );

        let started = tokio::time::Instant::now();
        svc.login(LoginRequest::new("a@b.c", "p")).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(100));

        let started = tokio::time::Instant::now();
        svc.logout().await.unwrap();
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(50));
        assert!(elapsed < Duration::from_millis(100));
    }
}
