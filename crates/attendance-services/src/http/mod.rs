//! 真实后端的 HTTP 实现

pub mod client;
pub mod services;

pub use client::HttpClient;
pub use services::{
    HttpAttendanceService, HttpAuthService, HttpClassesService, HttpEventsService,
    HttpReportsService,
};
