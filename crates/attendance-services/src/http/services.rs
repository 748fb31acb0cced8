//! 基于 HTTP 的真实后端实现
//!
//! 与内存模拟服务实现同一组 trait，路径与响应形状见各方法。

use async_trait::async_trait;
use tracing::debug;

use attendance_shared::Result;

use super::client::HttpClient;
use crate::api::{AttendanceApi, AuthApi, ClassesApi, EventsApi, ReportsApi};
use crate::models::{
    Ack, Attendance, AttendanceFilter, AttendancePatch, AttendanceReport, Class, DataEnvelope,
    EventFilter, EventItem, EventPatch, EventSummary, LoginRequest, LoginResponse, NewAttendance,
    NewEvent, Page, RecoverPasswordRequest, RecoverPasswordResponse, ReportFilter, SummaryFilter,
    Teacher,
};

// ============================================================================
// 事件
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpEventsService {
    client: HttpClient,
}

impl HttpEventsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EventsApi for HttpEventsService {
    async fn list(&self, filter: EventFilter) -> Result<Vec<EventItem>> {
        self.client.get_with_query("/events", &filter).await
    }

    async fn get(&self, id: &str) -> Result<EventItem> {
        self.client.get(&format!("/events/{id}")).await
    }

    async fn create(&self, payload: NewEvent) -> Result<EventItem> {
        self.client.post("/events", &payload).await
    }

    async fn update(&self, id: &str, patch: EventPatch) -> Result<EventItem> {
        self.client.patch(&format!("/events/{id}"), &patch).await
    }

    async fn remove(&self, id: &str) -> Result<Ack> {
        self.client.delete(&format!("/events/{id}")).await
    }
}

// ============================================================================
// 考勤
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpAttendanceService {
    client: HttpClient,
}

impl HttpAttendanceService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttendanceApi for HttpAttendanceService {
    async fn list(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>> {
        self.client.get_with_query("/attendances", &filter).await
    }

    async fn get(&self, id: &str) -> Result<Attendance> {
        self.client.get(&format!("/attendances/{id}")).await
    }

    async fn create(&self, payload: NewAttendance) -> Result<Attendance> {
        self.client.post("/attendances", &payload).await
    }

    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<Attendance> {
        self.client.patch(&format!("/attendances/{id}"), &patch).await
    }

    async fn remove(&self, id: &str) -> Result<Ack> {
        self.client.delete(&format!("/attendances/{id}")).await
    }
}

// ============================================================================
// 班级
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpClassesService {
    client: HttpClient,
}

impl HttpClassesService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClassesApi for HttpClassesService {
    async fn get_my_classes(&self) -> Result<Vec<Class>> {
        let page: Page<Class> = self.client.get("/teachers/me/classes").await?;
        debug!(total = page.total, page = page.page, "获取教师班级");
        Ok(page.data)
    }

    async fn get_class_by_id(&self, id: &str) -> Result<Class> {
        let envelope: DataEnvelope<Class> = self.client.get(&format!("/classes/{id}")).await?;
        Ok(envelope.data)
    }

    async fn reset_student_device(&self, student_id: &str) -> Result<Ack> {
        self.client
            .post_empty(&format!("/students/{student_id}/reset-device"))
            .await
    }
}

// ============================================================================
// 报表
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpReportsService {
    client: HttpClient,
}

impl HttpReportsService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReportsApi for HttpReportsService {
    async fn attendance_report(&self, filter: ReportFilter) -> Result<AttendanceReport> {
        self.client
            .get_with_query("/reports/attendance", &filter)
            .await
    }

    async fn events_summary(&self, filter: SummaryFilter) -> Result<Vec<EventSummary>> {
        self.client
            .get_with_query("/reports/events-summary", &filter)
            .await
    }
}

// ============================================================================
// 认证
// ============================================================================

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: HttpClient,
}

impl HttpAuthService {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for HttpAuthService {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse> {
        let envelope: DataEnvelope<Teacher> = self.client.post("/auth/login", &request).await?;
        Ok(LoginResponse {
            teacher: envelope.data,
            message: envelope.message.unwrap_or_default(),
        })
    }

    async fn logout(&self) -> Result<()> {
        let _: Ack = self.client.post_empty("/auth/logout").await?;
        debug!("已登出");
        Ok(())
    }

    async fn me(&self) -> Result<Teacher> {
        let envelope: DataEnvelope<Teacher> = self.client.get("/teachers/me").await?;
        Ok(envelope.data)
    }

    async fn recover_password(
        &self,
        request: RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse> {
        self.client.post("/auth/recover-password", &request).await
    }
}
