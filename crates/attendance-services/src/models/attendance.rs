//! 考勤记录模型

use chrono::{DateTime, Utc};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::store::Record;

/// 考勤状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }
}

/// 查询参数中的状态过滤，`status=` 与缺省相同
pub(crate) fn status_filter<'de, D>(
    deserializer: D,
) -> Result<Option<AttendanceStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => {
            AttendanceStatus::deserialize(raw.as_str().into_deserializer()).map(Some)
        }
        _ => Ok(None),
    }
}

/// 单个学生在一次事件中的考勤记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: String,
    pub event_id: String,
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub status: AttendanceStatus,
    pub recorded_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Record for Attendance {
    fn id(&self) -> &str {
        &self.id
    }
}

/// 考勤列表查询条件，各条件之间为 AND 关系
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "status_filter",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<AttendanceStatus>,
}

impl AttendanceFilter {
    pub fn by_event(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: AttendanceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, attendance: &Attendance) -> bool {
        let event_ok = match self.event_id.as_deref().filter(|v| !v.is_empty()) {
            Some(event_id) => attendance.event_id == event_id,
            None => true,
        };
        let student_ok = match self.student_id.as_deref().filter(|v| !v.is_empty()) {
            Some(student_id) => attendance.student_id == student_id,
            None => true,
        };
        let status_ok = self.status.is_none_or(|s| attendance.status == s);

        event_ok && student_ok && status_ok
    }
}

/// 创建考勤请求
///
/// eventId、studentId、status 为必填
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub event_id: String,
    pub student_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NewAttendance {
    pub fn new(
        event_id: impl Into<String>,
        student_id: impl Into<String>,
        status: AttendanceStatus,
    ) -> Self {
        Self {
            event_id: event_id.into(),
            student_id: student_id.into(),
            student_name: None,
            status,
            notes: None,
        }
    }

    pub fn into_attendance(self, id: String, now: DateTime<Utc>) -> Attendance {
        Attendance {
            id,
            event_id: self.event_id,
            student_id: self.student_id,
            student_name: self.student_name,
            status: self.status,
            recorded_at: now,
            notes: self.notes,
            created_at: Some(now),
            updated_at: None,
        }
    }
}

/// 考勤部分更新（人工修正）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendancePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AttendanceStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttendancePatch {
    pub fn status(status: AttendanceStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply(self, attendance: &mut Attendance) {
        if let Some(event_id) = self.event_id {
            attendance.event_id = event_id;
        }
        if let Some(student_id) = self.student_id {
            attendance.student_id = student_id;
        }
        if let Some(student_name) = self.student_name {
            attendance.student_name = Some(student_name);
        }
        if let Some(status) = self.status {
            attendance.status = status;
        }
        if let Some(recorded_at) = self.recorded_at {
            attendance.recorded_at = recorded_at;
        }
        if let Some(notes) = self.notes {
            attendance.notes = Some(notes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(event_id: &str, student_id: &str, status: AttendanceStatus) -> Attendance {
        NewAttendance::new(event_id, student_id, status).into_attendance("att-1".to_string(), Utc::now())
    }

    #[test]
    fn test_filter_is_conjunction() {
        let a = record("ev-1", "stu-1", AttendanceStatus::Present);

        assert!(AttendanceFilter::default().matches(&a));
        assert!(AttendanceFilter::by_event("ev-1").matches(&a));
        assert!(
            AttendanceFilter::by_event("ev-1")
                .with_status(AttendanceStatus::Present)
                .matches(&a)
        );
        assert!(
            !AttendanceFilter::by_event("ev-1")
                .with_status(AttendanceStatus::Late)
                .matches(&a)
        );
        assert!(!AttendanceFilter::by_event("ev-2").matches(&a));

        let by_student = AttendanceFilter {
            student_id: Some("stu-2".to_string()),
            ..Default::default()
        };
        assert!(!by_student.matches(&a));
    }

    #[test]
    fn test_new_attendance_stamps_times() {
        let now = Utc::now();
        let a = NewAttendance::new("ev-1", "stu-1", AttendanceStatus::Late)
            .into_attendance("att-9".to_string(), now);

        assert_eq!(a.recorded_at, now);
        assert_eq!(a.created_at, Some(now));
        assert!(a.updated_at.is_none());
        assert!(a.notes.is_none());
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"present\""
        );
        let parsed: AttendanceStatus = serde_json::from_str("\"late\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Late);
        assert_eq!(parsed.as_str(), "late");
    }

    #[test]
    fn test_filter_empty_status_is_unset() {
        let filter: AttendanceFilter =
            serde_json::from_value(serde_json::json!({ "eventId": "ev-1", "status": "" }))
                .unwrap();
        assert!(filter.status.is_none());

        let filter: AttendanceFilter =
            serde_json::from_value(serde_json::json!({ "status": "absent" })).unwrap();
        assert_eq!(filter.status, Some(AttendanceStatus::Absent));

        assert!(
            serde_json::from_value::<AttendanceFilter>(serde_json::json!({ "status": "gone" }))
                .is_err()
        );
    }

    #[test]
    fn test_new_attendance_requires_status() {
        let missing = serde_json::json!({ "eventId": "ev-1", "studentId": "stu-1" });
        assert!(serde_json::from_value::<NewAttendance>(missing).is_err());
    }
}
