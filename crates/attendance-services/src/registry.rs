//! 服务注册表
//!
//! 启动时按 `api.use_mocks` 选择一次实现，之后调用方只持有 trait 对象。

use std::fmt;
use std::sync::Arc;

use tracing::info;

use attendance_shared::Result;
use attendance_shared::config::{ApiConfig, MockConfig};

use crate::api::{AttendanceApi, AuthApi, ClassesApi, EventsApi, ReportsApi};
use crate::clock::{Clock, Latency, SystemClock};
use crate::http::{
    HttpAttendanceService, HttpAuthService, HttpClassesService, HttpClient, HttpEventsService,
    HttpReportsService,
};
use crate::services::{
    AttendanceService, ClassesService, EventsService, MockAuthService, ReportsService,
};
use crate::store::MockStore;

/// 当前使用的后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    InMemory,
    Http,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InMemory => write!(f, "in-memory"),
            Self::Http => write!(f, "http"),
        }
    }
}

#[derive(Clone)]
pub struct ServiceRegistry {
    pub events: Arc<dyn EventsApi>,
    pub attendance: Arc<dyn AttendanceApi>,
    pub classes: Arc<dyn ClassesApi>,
    pub reports: Arc<dyn ReportsApi>,
    pub auth: Arc<dyn AuthApi>,
    kind: BackendKind,
}

impl ServiceRegistry {
    /// 按配置选择实现；内存实现使用新建并写入样例数据的存储
    pub fn from_config(api: &ApiConfig, mock: &MockConfig) -> Result<Self> {
        if api.use_mocks {
            let clock = Arc::new(SystemClock);
            let store = if mock.seed_on_start {
                MockStore::seeded(clock.now())
            } else {
                MockStore::new()
            };
            Ok(Self::in_memory(Arc::new(store), clock, mock))
        } else {
            Self::http(api)
        }
    }

    pub fn in_memory(store: Arc<MockStore>, clock: Arc<dyn Clock>, mock: &MockConfig) -> Self {
        let latency = Latency::new(clock.clone(), mock.service_latency());
        let auth = MockAuthService::new(
            Latency::new(clock.clone(), mock.login_latency()),
            Latency::new(clock, mock.session_latency()),
        );

        info!(latency_ms = mock.latency_ms, "使用内存模拟后端");
        Self {
            events: Arc::new(EventsService::new(store.clone(), latency.clone())),
            attendance: Arc::new(AttendanceService::new(store.clone(), latency.clone())),
            classes: Arc::new(ClassesService::new(store.clone(), latency.clone())),
            reports: Arc::new(ReportsService::new(store, latency)),
            auth: Arc::new(auth),
            kind: BackendKind::InMemory,
        }
    }

    pub fn http(api: &ApiConfig) -> Result<Self> {
        let client = HttpClient::new(api)?;

        info!(base_url = %client.base_url(), "使用 HTTP 后端");
        Ok(Self {
            events: Arc::new(HttpEventsService::new(client.clone())),
            attendance: Arc::new(HttpAttendanceService::new(client.clone())),
            classes: Arc::new(HttpClassesService::new(client.clone())),
            reports: Arc::new(HttpReportsService::new(client.clone())),
            auth: Arc::new(HttpAuthService::new(client)),
            kind: BackendKind::Http,
        })
    }

    /// 由任意实现组装，主要用于测试替换单个能力
    pub fn from_parts(
        events: Arc<dyn EventsApi>,
        attendance: Arc<dyn AttendanceApi>,
        classes: Arc<dyn ClassesApi>,
        reports: Arc<dyn ReportsApi>,
        auth: Arc<dyn AuthApi>,
        kind: BackendKind,
    ) -> Self {
        Self {
            events,
            attendance,
            classes,
            reports,
            auth,
            kind,
        }
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
