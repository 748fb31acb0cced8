//! 事件路由

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use attendance_shared::AttendanceError;

use super::AppState;
use crate::models::{Ack, EventFilter, EventItem, EventPatch, NewEvent};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).patch(update_event).delete(delete_event),
        )
}

/// GET /events?classId=&q=
async fn list_events(
    State(registry): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<EventItem>>, AttendanceError> {
    Ok(Json(registry.events.list(filter).await?))
}

/// GET /events/:id
async fn get_event(
    State(registry): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventItem>, AttendanceError> {
    Ok(Json(registry.events.get(&id).await?))
}

/// POST /events
async fn create_event(
    State(registry): State<AppState>,
    Json(payload): Json<NewEvent>,
) -> Result<(StatusCode, Json<EventItem>), AttendanceError> {
    let event = registry.events.create(payload).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// PATCH /events/:id
async fn update_event(
    State(registry): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<EventItem>, AttendanceError> {
    Ok(Json(registry.events.update(&id, patch).await?))
}

/// DELETE /events/:id
async fn delete_event(
    State(registry): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ack>, AttendanceError> {
    Ok(Json(registry.events.remove(&id).await?))
}
