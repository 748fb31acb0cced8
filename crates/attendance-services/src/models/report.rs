//! 报表模型

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Attendance, AttendanceStatus, EventItem};

/// 考勤报表查询条件
///
/// from/to 按 recordedAt 做闭区间过滤；classId 通过该班级下的事件间接过滤
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "super::attendance::status_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<AttendanceStatus>,
}

impl ReportFilter {
    pub fn by_class(class_id: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            ..Default::default()
        }
    }
}

/// 考勤报表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReport {
    pub total: usize,
    /// 只包含实际出现过的状态
    pub by_status: BTreeMap<AttendanceStatus, usize>,
    pub items: Vec<Attendance>,
}

impl AttendanceReport {
    pub fn from_items(items: Vec<Attendance>) -> Self {
        let mut by_status = BTreeMap::new();
        for item in &items {
            *by_status.entry(item.status).or_insert(0) += 1;
        }

        Self {
            total: items.len(),
            by_status,
            items,
        }
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }
}

/// 事件汇总查询条件，按 startsAt 做闭区间过滤
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

/// 单个事件的考勤汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub event: EventItem,
    pub total_attendance: usize,
    pub present: usize,
    pub absent: usize,
    pub late: usize,
}

impl EventSummary {
    pub fn new<'a>(event: EventItem, attendances: impl Iterator<Item = &'a Attendance>) -> Self {
        let (mut present, mut absent, mut late) = (0, 0, 0);
        for attendance in attendances.filter(|a| a.event_id == event.id) {
            match attendance.status {
                AttendanceStatus::Present => present += 1,
                AttendanceStatus::Absent => absent += 1,
                AttendanceStatus::Late => late += 1,
            }
        }

        Self {
            event,
            total_attendance: present + absent + late,
            present,
            absent,
            late,
        }
    }
}

/// 判断时间点是否落在可选的闭区间内
pub(crate) fn within(at: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    from.is_none_or(|from| at >= from) && to.is_none_or(|to| at <= to)
}
