//! 能力接口定义
//!
//! 每个后端能力一个 trait，内存模拟实现与 HTTP 实现签名完全一致，
//! 调用方只依赖 trait，切换实现对其透明。

use async_trait::async_trait;

use attendance_shared::Result;

use crate::models::{
    Ack, Attendance, AttendanceFilter, AttendancePatch, AttendanceReport, Class, EventFilter,
    EventItem, EventPatch, EventSummary, LoginRequest, LoginResponse, NewAttendance, NewEvent,
    RecoverPasswordRequest, RecoverPasswordResponse, ReportFilter, SummaryFilter, Teacher,
};

/// 事件接口（对应 `/events`）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventsApi: Send + Sync {
    async fn list(&self, filter: EventFilter) -> Result<Vec<EventItem>>;
    async fn get(&self, id: &str) -> Result<EventItem>;
    async fn create(&self, payload: NewEvent) -> Result<EventItem>;
    async fn update(&self, id: &str, patch: EventPatch) -> Result<EventItem>;
    /// 删除事件，并级联删除其下所有考勤
    async fn remove(&self, id: &str) -> Result<Ack>;
}

/// 考勤接口（对应 `/attendances`）
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    async fn list(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>>;
    async fn get(&self, id: &str) -> Result<Attendance>;
    async fn create(&self, payload: NewAttendance) -> Result<Attendance>;
    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<Attendance>;
    async fn remove(&self, id: &str) -> Result<Ack>;
}

/// 班级接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClassesApi: Send + Sync {
    /// 当前教师的班级（`GET /teachers/me/classes`）
    async fn get_my_classes(&self) -> Result<Vec<Class>>;
    async fn get_class_by_id(&self, id: &str) -> Result<Class>;
    /// 解绑学生设备（`POST /students/:id/reset-device`）
    async fn reset_student_device(&self, student_id: &str) -> Result<Ack>;
}

/// 报表接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportsApi: Send + Sync {
    async fn attendance_report(&self, filter: ReportFilter) -> Result<AttendanceReport>;
    async fn events_summary(&self, filter: SummaryFilter) -> Result<Vec<EventSummary>>;
}

/// 认证接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<LoginResponse>;
    async fn logout(&self) -> Result<()>;
    async fn me(&self) -> Result<Teacher>;
    async fn recover_password(
        &self,
        request: RecoverPasswordRequest,
    ) -> Result<RecoverPasswordResponse>;
}
