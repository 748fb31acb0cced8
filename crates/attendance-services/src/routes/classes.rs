//! 班级与设备路由

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use attendance_shared::AttendanceError;

use super::AppState;
use crate::models::{Ack, Class, DataEnvelope, Page};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/teachers/me/classes", get(my_classes))
        .route("/classes/{id}", get(get_class))
        .route("/students/{id}/reset-device", post(reset_device))
}

/// GET /teachers/me/classes
async fn my_classes(
    State(registry): State<AppState>,
) -> Result<Json<Page<Class>>, AttendanceError> {
    let classes = registry.classes.get_my_classes().await?;
    Ok(Json(Page::single(classes)))
}

/// GET /classes/:id
async fn get_class(
    State(registry): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DataEnvelope<Class>>, AttendanceError> {
    let class = registry.classes.get_class_by_id(&id).await?;
    Ok(Json(DataEnvelope::new(class)))
}

/// POST /students/:id/reset-device
async fn reset_device(
    State(registry): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Json<Ack>, AttendanceError> {
    Ok(Json(registry.classes.reset_student_device(&student_id).await?))
}
