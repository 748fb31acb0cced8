//! 领域模型
//!
//! 字段在线上统一使用 camelCase，与看板前端及真实后端保持一致。

pub mod attendance;
pub mod class;
pub mod envelope;
pub mod event;
pub mod report;
pub mod teacher;

pub use attendance::{
    Attendance, AttendanceFilter, AttendancePatch, AttendanceStatus, NewAttendance,
};
pub use class::{Class, Device, DeviceStatus, Student};
pub use envelope::{Ack, DataEnvelope, Page};
pub use event::{EventFilter, EventItem, EventPatch, NewEvent, UNTITLED_EVENT};
pub use report::{AttendanceReport, EventSummary, ReportFilter, SummaryFilter};
pub use teacher::{
    LoginRequest, LoginResponse, RecoverPasswordRequest, RecoverPasswordResponse, Teacher,
};
