//! 内存报表服务
//!
//! 扫描考勤与事件存储，按过滤条件聚合统计。

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use attendance_shared::Result;

use crate::api::ReportsApi;
use crate::clock::Latency;
use crate::models::report::within;
use crate::models::{AttendanceReport, EventSummary, ReportFilter, SummaryFilter};
use crate::store::MockStore;

/// 报表服务
#[derive(Debug, Clone)]
pub struct ReportsService {
    store: Arc<MockStore>,
    latency: Latency,
}

impl ReportsService {
    pub fn new(store: Arc<MockStore>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// 指定班级下所有事件的 id
    fn class_event_ids(&self, class_id: &str) -> HashSet<String> {
        self.store
            .events
            .list_by(|e| e.class_id.as_deref() == Some(class_id))
            .into_iter()
            .map(|e| e.id)
            .collect()
    }
}

#[async_trait]
impl ReportsApi for ReportsService {
    async fn attendance_report(&self, filter: ReportFilter) -> Result<AttendanceReport> {
        self.latency.wait().await;

        let class_events = filter
            .class_id
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(|class_id| self.class_event_ids(class_id));
        let event_id = filter.event_id.as_deref().filter(|v| !v.is_empty());
        let student_id = filter.student_id.as_deref().filter(|v| !v.is_empty());

        let items = self.store.attendances.list_by(|a| {
            within(a.recorded_at, filter.from, filter.to)
                && class_events.as_ref().is_none_or(|ids| ids.contains(&a.event_id))
                && event_id.is_none_or(|id| a.event_id == id)
                && student_id.is_none_or(|id| a.student_id == id)
                && filter.status.is_none_or(|s| a.status == s)
        });

        let report = AttendanceReport::from_items(items);
        info!(
            class_id = ?filter.class_id,
            event_id = ?filter.event_id,
            total = report.total,
            "生成考勤报表"
        );
        Ok(report)
    }

    async fn events_summary(&self, filter: SummaryFilter) -> Result<Vec<EventSummary>> {
        self.latency.wait().await;

        let events = self
            .store
            .events
            .list_by(|e| within(e.starts_at, filter.from, filter.to));
        let attendances = self.store.attendances.list();

        let summaries: Vec<EventSummary> = events
            .into_iter()
            .map(|event| EventSummary::new(event, attendances.iter()))
            .collect();

        info!(events = summaries.len(), "生成事件汇总");
        Ok(summaries)
    }
}
