//! 内存模拟服务
//!
//! 以内存存储模拟真实后端的 REST 接口，每次调用前注入固定延迟。

pub mod attendance;
pub mod auth;
pub mod classes;
pub mod events;
pub mod reports;

pub use attendance::AttendanceService;
pub use auth::MockAuthService;
pub use classes::ClassesService;
pub use events::EventsService;
pub use reports::ReportsService;
