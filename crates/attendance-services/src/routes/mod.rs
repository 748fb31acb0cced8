//! 模拟后端的 REST 路由
//!
//! 路由只依赖 `ServiceRegistry` 中的 trait 对象，因此既能挂内存实现，
//! 也能作为真实后端前的转发层。

mod attendance;
mod auth;
mod classes;
mod events;
mod reports;

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::registry::ServiceRegistry;

pub type AppState = Arc<ServiceRegistry>;

/// 组装全部路由
pub fn build_router(registry: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .merge(events::routes())
        .merge(attendance::routes())
        .merge(classes::routes())
        .merge(reports::routes())
        .merge(auth::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(registry)
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    backend: String,
}

/// GET /health
async fn health_check(State(registry): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        backend: registry.kind().to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::{AppState, build_router};
    use crate::api::{MockAttendanceApi, MockAuthApi, MockClassesApi, MockEventsApi, MockReportsApi};
    use crate::registry::{BackendKind, ServiceRegistry};

    /// 每个能力一个 mockall 桩，测试只为关心的那个设置期望
    #[derive(Default)]
    pub struct Mocks {
        pub events: MockEventsApi,
        pub attendance: MockAttendanceApi,
        pub classes: MockClassesApi,
        pub reports: MockReportsApi,
        pub auth: MockAuthApi,
    }

    impl Mocks {
        pub fn into_router(self) -> Router {
            let registry: AppState = Arc::new(ServiceRegistry::from_parts(
                Arc::new(self.events),
                Arc::new(self.attendance),
                Arc::new(self.classes),
                Arc::new(self.reports),
                Arc::new(self.auth),
                BackendKind::InMemory,
            ));
            build_router(registry)
        }
    }

    pub async fn send(router: Router, request: Request<Body>) -> Response<Body> {
        router.oneshot(request).await.unwrap()
    }

    pub fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    pub async fn read_json<T: DeserializeOwned>(response: Response<Body>) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub async fn expect_status<T: DeserializeOwned>(
        router: Router,
        request: Request<Body>,
        status: StatusCode,
    ) -> T {
        let response = send(router, request).await;
        assert_eq!(response.status(), status);
        read_json(response).await
    }
}
