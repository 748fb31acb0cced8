//! 考勤路由

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use attendance_shared::AttendanceError;

use super::AppState;
use crate::models::{Ack, Attendance, AttendanceFilter, AttendancePatch, NewAttendance};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/attendances", get(list_attendances).post(create_attendance))
        .route(
            "/attendances/{id}",
            get(get_attendance)
                .patch(update_attendance)
                .delete(delete_attendance),
        )
}

/// GET /attendances?eventId=&studentId=&status=
async fn list_attendances(
    State(registry): State<AppState>,
    Query(filter): Query<AttendanceFilter>,
) -> Result<Json<Vec<Attendance>>, AttendanceError> {
    Ok(Json(registry.attendance.list(filter).await?))
}

/// GET /attendances/:id
async fn get_attendance(
    State(registry): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Attendance>, AttendanceError> {
    Ok(Json(registry.attendance.get(&id).await?))
}

/// POST /attendances
async fn create_attendance(
    State(registry): State<AppState>,
    Json(payload): Json<NewAttendance>,
) -> Result<(StatusCode, Json<Attendance>), AttendanceError> {
    let attendance = registry.attendance.create(payload).await?;
    Ok((StatusCode::CREATED, Json(attendance)))
}

/// PATCH /attendances/:id
async fn update_attendance(
    State(registry): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<AttendancePatch>,
) -> Result<Json<Attendance>, AttendanceError> {
    Ok(Json(registry.attendance.update(&id, patch).await?))
}

/// DELETE /attendances/:id
async fn delete_attendance(
    State(registry): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, AttendanceError> {
    Ok(Json(registry.attendance.remove(&id).await?))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Mocks, expect_status, get, json_request, send};
    use crate::models::{Ack, Attendance, AttendanceStatus, NewAttendance};
    use axum::http::StatusCode;
    use chrono::Utc;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_parses_status_query() {
        let mut mocks = Mocks::default();
        mocks
            .attendance
            .expect_list()
            .withf(|filter| {
                filter.event_id.as_deref() == Some("ev-1")
                    && filter.status == Some(AttendanceStatus::Late)
                    && filter.student_id.is_none()
            })
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let body: Vec<Attendance> = expect_status(
            mocks.into_router(),
            get("/attendances?eventId=ev-1&status=late"),
            StatusCode::OK,
        )
        .await;

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_list_empty_status_means_any() {
        let mut mocks = Mocks::default();
        mocks
            .attendance
            .expect_list()
            .withf(|filter| filter.event_id.as_deref() == Some("ev-1") && filter.status.is_none())
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let body: Vec<Attendance> = expect_status(
            mocks.into_router(),
            get("/attendances?eventId=ev-1&status="),
            StatusCode::OK,
        )
        .await;

        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_create_requires_status() {
        // 缺少必填字段时由 Json 提取器拒绝，不会调用服务
        let router = Mocks::default().into_router();
        let response = send(
            router,
            json_request(
                "POST",
                "/attendances",
                json!({ "eventId": "ev-1", "studentId": "stu-1" }),
            ),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_create_returns_created() {
        let mut mocks = Mocks::default();
        mocks
            .attendance
            .expect_create()
            .returning(|payload: NewAttendance| {
                Ok(payload.into_attendance("att-1".to_string(), Utc::now()))
            });

        let body: Attendance = expect_status(
            mocks.into_router(),
            json_request(
                "POST",
                "/attendances",
                json!({ "eventId": "ev-1", "studentId": "stu-1", "status": "present" }),
            ),
            StatusCode::CREATED,
        )
        .await;

        assert_eq!(body.id, "att-1");
        assert_eq!(body.status, AttendanceStatus::Present);
    }

    #[tokio::test]
    async fn test_delete_acknowledges() {
        let mut mocks = Mocks::default();
        mocks
            .attendance
            .expect_remove()
            .withf(|id| id == "att-1")
            .returning(|_| Ok(Ack::ok()));

        let body: Ack = expect_status(
            mocks.into_router(),
            json_request("DELETE", "/attendances/att-1", json!({})),
            StatusCode::OK,
        )
        .await;

        assert!(body.success);
    }
}
