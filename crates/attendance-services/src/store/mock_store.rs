//! 模拟后端的实体存储
//!
//! 事件、考勤、班级三个独立集合。显式构造并通过 `Arc` 传给各服务，
//! 不使用全局状态，因此测试中可以并行持有多个互不影响的实例。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::id::generate_id;
use super::memory_store::{MemoryStore, Record};
use crate::generators::{sample_attendances, sample_classes, sample_events};
use crate::models::{Attendance, Class, EventItem};

/// seed 时可替换的初始数据
#[derive(Debug, Clone, Default)]
pub struct SeedOverrides {
    pub events: Option<Vec<EventItem>>,
    pub attendances: Option<Vec<Attendance>>,
}

impl SeedOverrides {
    pub fn events(events: Vec<EventItem>) -> Self {
        Self {
            events: Some(events),
            attendances: None,
        }
    }

    pub fn with_attendances(mut self, attendances: Vec<Attendance>) -> Self {
        self.attendances = Some(attendances);
        self
    }
}

/// 存储快照，用于导出样例数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub events: Vec<EventItem>,
    pub attendances: Vec<Attendance>,
    pub classes: Vec<Class>,
}

/// 模拟后端存储
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    pub events: MemoryStore<EventItem>,
    pub attendances: MemoryStore<Attendance>,
    pub classes: MemoryStore<Class>,
}

impl MockStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建并写入默认样例数据
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let store = Self::new();
        store.seed(SeedOverrides::default(), now);
        store
    }

    /// 写入初始数据
    ///
    /// 事件与考勤使用调用方提供的数据，未提供时使用内置样例；
    /// 班级总是重新生成两条固定记录。默认考勤挂在第一个事件上，
    /// 没有任何事件时不生成默认考勤。
    pub fn seed(&self, overrides: SeedOverrides, now: DateTime<Utc>) {
        let events = overrides.events.unwrap_or_else(|| sample_events(now));
        let attendances = match overrides.attendances {
            Some(attendances) => attendances,
            None => events
                .first()
                .map(|first| sample_attendances(&first.id, now))
                .unwrap_or_default(),
        };

        self.events.replace_all(events);
        self.attendances.replace_all(attendances);
        self.classes.replace_all(sample_classes(now));

        info!(
            events = self.events.count(),
            attendances = self.attendances.count(),
            classes = self.classes.count(),
            "模拟数据已写入"
        );
    }

    /// 清空事件与考勤
    ///
    /// 班级数据保持不变
    pub fn reset(&self) {
        self.events.clear();
        self.attendances.clear();
        info!("模拟事件与考勤已清空");
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            events: self.events.list(),
            attendances: self.attendances.list(),
            classes: self.classes.list(),
        }
    }
}

/// 生成在目标集合中尚未使用的 id
pub fn unique_id<T: Record + Clone>(
    collection: &MemoryStore<T>,
    prefix: &str,
    now: DateTime<Utc>,
) -> String {
    loop {
        let id = generate_id(prefix, now);
        if !collection.contains(&id) {
            return id;
        }
    }
}
