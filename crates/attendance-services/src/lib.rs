//! Attendance Services
//!
//! 考勤看板的服务层：统一的能力接口，加上两种可互换的实现。
//!
//! # 主要模块
//!
//! - `api`: 事件、考勤、班级、报表、认证五个能力 trait
//! - `services`: 基于内存存储、带模拟延迟的实现
//! - `http`: 基于 reqwest 访问真实后端的实现
//! - `registry`: 启动时按配置选择实现
//! - `routes`: 将任一实现暴露为 REST 接口的 axum 路由
//! - `auth`: 登录身份与会话
//!
//! # 使用示例
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use attendance_services::clock::InstantClock;
//! use attendance_services::models::EventFilter;
//! use attendance_services::registry::ServiceRegistry;
//! use attendance_services::store::MockStore;
//! use attendance_shared::config::MockConfig;
//!
//! # tokio_test::block_on(async {
//! let store = Arc::new(MockStore::seeded(chrono::Utc::now()));
//! let registry = ServiceRegistry::in_memory(store, Arc::new(InstantClock), &MockConfig::default());
//!
//! let events = registry.events.list(EventFilter::default()).await.unwrap();
//! assert_eq!(events.len(), 2);
//! # });
//! ```

pub mod api;
pub mod auth;
pub mod cli;
pub mod clock;
pub mod generators;
pub mod http;
pub mod models;
pub mod registry;
pub mod routes;
pub mod services;
pub mod store;
