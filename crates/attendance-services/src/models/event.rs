//! 事件（课堂）模型
//!
//! 事件代表一次需要记录考勤的课堂，可通过 classId 弱引用所属班级。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// 未提供标题时使用的占位标题
pub const UNTITLED_EVENT: &str = "Untitled";

/// 课堂事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for EventItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 事件列表查询条件
///
/// 空字符串视为未设置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
    /// 在标题或描述中做大小写不敏感的子串匹配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl EventFilter {
    pub fn by_class(class_id: impl Into<String>) -> Self {
        Self {
            class_id: Some(class_id.into()),
            ..Default::default()
        }
    }

    pub fn search(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, event: &EventItem) -> bool {
        if let Some(class_id) = non_empty(&self.class_id) {
            if event.class_id.as_deref() != Some(class_id) {
                return false;
            }
        }

        if let Some(q) = non_empty(&self.q) {
            let q = q.to_lowercase();
            let in_title = event.title.to_lowercase().contains(&q);
            let in_description = event
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q));
            if !in_title && !in_description {
                return false;
            }
        }

        true
    }
}

/// 创建事件请求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 未提供时取创建时刻
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

impl NewEvent {
    /// 生成最终记录，id 与时间戳由调用方提供
    pub fn into_event(self, id: String, now: DateTime<Utc>) -> EventItem {
        let title = self
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED_EVENT.to_string());

        EventItem {
            id,
            title,
            description: self.description,
            starts_at: self.starts_at.unwrap_or(now),
            ends_at: self.ends_at,
            class_id: self.class_id,
            created_at: now,
            updated_at: None,
        }
    }
}

/// 事件部分更新
///
/// 只覆盖出现的字段；id 与 createdAt 不可修改
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ends_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_id: Option<String>,
}

impl EventPatch {
    pub fn apply(self, event: &mut EventItem) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = Some(description);
        }
        if let Some(starts_at) = self.starts_at {
            event.starts_at = starts_at;
        }
        if let Some(ends_at) = self.ends_at {
            event.ends_at = Some(ends_at);
        }
        if let Some(class_id) = self.class_id {
            event.class_id = Some(class_id);
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
