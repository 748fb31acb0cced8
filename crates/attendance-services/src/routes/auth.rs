//! 认证路由

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use attendance_shared::AttendanceError;

use super::AppState;
use crate::models::{
    Ack, DataEnvelope, LoginRequest, RecoverPasswordRequest, RecoverPasswordResponse, Teacher,
};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/recover-password", post(recover_password))
        .route("/teachers/me", get(me))
}

/// POST /auth/login
async fn login(
    State(registry): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<DataEnvelope<Teacher>>, AttendanceError> {
    let response = registry.auth.login(request).await?;
    Ok(Json(DataEnvelope::with_message(
        response.teacher,
        response.message,
    )))
}

/// POST /auth/logout
async fn logout(State(registry): State<AppState>) -> Result<Json<Ack>, AttendanceError> {
    registry.auth.logout().await?;
    Ok(Json(Ack::ok()))
}

/// GET /teachers/me
async fn me(
    State(registry): State<AppState>,
) -> Result<Json<DataEnvelope<Teacher>>, AttendanceError> {
    Ok(Json(DataEnvelope::new(registry.auth.me().await?)))
}

/// POST /auth/recover-password
async fn recover_password(
    State(registry): State<AppState>,
    Json(request): Json<RecoverPasswordRequest>,
) -> Result<Json<RecoverPasswordResponse>, AttendanceError> {
    Ok(Json(registry.auth.recover_password(request).await?))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Mocks, expect_status, json_request};
    use crate::generators::mock_teacher;
    use crate::models::{DataEnvelope, LoginResponse, Teacher};
    use attendance_shared::{AttendanceError, ErrorBody};
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_login_returns_teacher_with_message() {
        let mut mocks = Mocks::default();
        mocks
            .auth
            .expect_login()
            .withf(|req| req.email == "prof@example.com" && req.password == "secret")
            .returning(|_| {
                Ok(LoginResponse {
                    teacher: mock_teacher(Utc::now()),
                    message: "Login successful".to_string(),
                })
            });

        let body: DataEnvelope<Teacher> = expect_status(
            mocks.into_router(),
            json_request(
                "POST",
                "/auth/login",
                json!({ "email": "prof@example.com", "password": "secret" }),
            ),
            StatusCode::OK,
        )
        .await;

        assert_eq!(body.data.id, "mock-teacher-1");
        assert_eq!(body.message.as_deref(), Some("Login successful"));
    }

    #[tokio::test]
    async fn test_upstream_status_is_preserved() {
        let mut mocks = Mocks::default();
        mocks.auth.expect_logout().returning(|| {
            Err(AttendanceError::Api {
                status: 401,
                message: "Unauthorized".to_string(),
            })
        });

        let body: ErrorBody = expect_status(
            mocks.into_router(),
            json_request("POST", "/auth/logout", json!({})),
            StatusCode::UNAUTHORIZED,
        )
        .await;

        assert_eq!(body.status, 401);
    }

    #[tokio::test]
    async fn test_recover_password_uses_snake_case() {
        let mut mocks = Mocks::default();
        mocks
            .auth
            .expect_recover_password()
            .withf(|req| req.teacher_email == "prof@example.com")
            .returning(|req| {
                Ok(crate::models::RecoverPasswordResponse {
                    status: "sent".to_string(),
                    teacher_email: req.teacher_email,
                    sent_at: Utc::now(),
                })
            });

        let body: serde_json::Value = expect_status(
            mocks.into_router(),
            json_request(
                "POST",
                "/auth/recover-password",
                json!({ "teacher_email": "prof@example.com" }),
            ),
            StatusCode::OK,
        )
        .await;

        assert_eq!(body["status"], "sent");
        assert_eq!(body["teacher_email"], "prof@example.com");
    }
}
