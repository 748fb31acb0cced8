//! 内存事件服务
//!
//! 模拟 `/events` CRUD。删除事件时级联删除其下全部考勤。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use attendance_shared::{AttendanceError, Result};

use crate::api::EventsApi;
use crate::clock::Latency;
use crate::models::{Ack, EventFilter, EventItem, EventPatch, NewEvent};
use crate::store::id::EVENT_PREFIX;
use crate::store::{MockStore, unique_id};

const ENTITY: &str = "Event";

/// 事件服务
#[derive(Debug, Clone)]
pub struct EventsService {
    store: Arc<MockStore>,
    latency: Latency,
}

impl EventsService {
    pub fn new(store: Arc<MockStore>, latency: Latency) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl EventsApi for EventsService {
    async fn list(&self, filter: EventFilter) -> Result<Vec<EventItem>> {
        self.latency.wait().await;

        let events = self.store.events.list_by(|e| filter.matches(e));
        info!(
            class_id = ?filter.class_id,
            q = ?filter.q,
            returned = events.len(),
            "列出事件"
        );
        Ok(events)
    }

    async fn get(&self, id: &str) -> Result<EventItem> {
        self.latency.wait().await;

        self.store.events.get(id).ok_or_else(|| {
            warn!(event_id = %id, "事件不存在");
            AttendanceError::not_found(ENTITY)
        })
    }

    async fn create(&self, payload: NewEvent) -> Result<EventItem> {
        self.latency.wait().await;

        let now = self.latency.now();
        let id = unique_id(&self.store.events, EVENT_PREFIX, now);
        let event = payload.into_event(id, now);

        info!(
            event_id = %event.id,
            class_id = ?event.class_id,
            title = %event.title,
            "创建事件"
        );

        self.store.events.insert(event.clone());
        Ok(event)
    }

    async fn update(&self, id: &str, patch: EventPatch) -> Result<EventItem> {
        self.latency.wait().await;

        let now = self.latency.now();
        let updated = self
            .store
            .events
            .update(id, |event| {
                patch.apply(event);
                event.updated_at = Some(now);
            })
            .ok_or_else(|| {
                warn!(event_id = %id, "事件不存在，无法更新");
                AttendanceError::not_found(ENTITY)
            })?;

        info!(event_id = %id, "更新事件");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<Ack> {
        self.latency.wait().await;

        if self.store.events.remove(id).is_none() {
            warn!(event_id = %id, "事件不存在，无法删除");
            return Err(AttendanceError::not_found(ENTITY));
        }

        let cascaded = self.store.attendances.remove_where(|a| a.event_id == id);
        info!(event_id = %id, cascaded_attendances = cascaded, "删除事件");

        Ok(Ack::ok())
    }
}
