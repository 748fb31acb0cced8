//! 报表路由

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use attendance_shared::AttendanceError;

use super::AppState;
use crate::models::{AttendanceReport, EventSummary, ReportFilter, SummaryFilter};

pub(super) fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/attendance", get(attendance_report))
        .route("/reports/events-summary", get(events_summary))
}

/// GET /reports/attendance?from=&to=&classId=&eventId=&studentId=&status=
async fn attendance_report(
    State(registry): State<AppState>,
    Query(filter): Query<ReportFilter>,
) -> Result<Json<AttendanceReport>, AttendanceError> {
    Ok(Json(registry.reports.attendance_report(filter).await?))
}

/// GET /reports/events-summary?from=&to=
async fn events_summary(
    State(registry): State<AppState>,
    Query(filter): Query<SummaryFilter>,
) -> Result<Json<Vec<EventSummary>>, AttendanceError> {
    Ok(Json(registry.reports.events_summary(filter).await?))
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Mocks, expect_status, get};
    use crate::models::{AttendanceReport, AttendanceStatus};
    use axum::http::StatusCode;
    use chrono::{TimeZone, Utc};

    #[tokio::test]
    async fn test_report_query_is_parsed() {
        let from = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut mocks = Mocks::default();
        mocks
            .reports
            .expect_attendance_report()
            .withf(move |filter| {
                filter.from == Some(from)
                    && filter.class_id.as_deref() == Some("class-1")
                    && filter.status == Some(AttendanceStatus::Absent)
            })
            .returning(|_| Ok(AttendanceReport::from_items(Vec::new())));

        let body: serde_json::Value = expect_status(
            mocks.into_router(),
            get("/reports/attendance?from=2024-03-01T00:00:00Z&classId=class-1&status=absent"),
            StatusCode::OK,
        )
        .await;

        assert_eq!(body["total"], 0);
        assert!(body["byStatus"].as_object().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_report_empty_status_means_any() {
        let mut mocks = Mocks::default();
        mocks
            .reports
            .expect_attendance_report()
            .withf(|filter| filter.status.is_none() && filter.class_id.as_deref() == Some("class-1"))
            .times(1)
            .returning(|_| Ok(AttendanceReport::from_items(Vec::new())));

        let body: AttendanceReport = expect_status(
            mocks.into_router(),
            get("/reports/attendance?classId=class-1&status="),
            StatusCode::OK,
        )
        .await;

        assert_eq!(body.total, 0);
    }

    #[tokio::test]
    async fn test_summary_without_bounds() {
        let mut mocks = Mocks::default();
        mocks
            .reports
            .expect_events_summary()
            .withf(|filter| filter.from.is_none() && filter.to.is_none())
            .returning(|_| Ok(Vec::new()));

        let body: Vec<serde_json::Value> = expect_status(
            mocks.into_router(),
            get("/reports/events-summary"),
            StatusCode::OK,
        )
        .await;

        assert!(body.is_empty());
    }
}
