//! 内存考勤服务
//!
//! 模拟 `/attendances` CRUD，过滤条件之间为 AND 关系。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use attendance_shared::{AttendanceError, Result};

use crate::api::AttendanceApi;
use crate::clock::Latency;
use crate::models::{Ack, Attendance, AttendanceFilter, AttendancePatch, NewAttendance};
use crate::store::id::ATTENDANCE_PREFIX;
use crate::store::{MockStore, unique_id};

const ENTITY: &str = "Attendance";

/// 考勤服务
#[derive(Debug, Clone)]
pub struct AttendanceService {
    store: Arc<MockStore>,
    latency: Latency,
}

impl AttendanceService {
    pub fn new(store: Arc<MockStore>, latency: Latency) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl AttendanceApi for AttendanceService {
    async fn list(&self, filter: AttendanceFilter) -> Result<Vec<Attendance>> {
        self.latency.wait().await;

        let items = self.store.attendances.list_by(|a| filter.matches(a));
        info!(
            event_id = ?filter.event_id,
            student_id = ?filter.student_id,
            status = ?filter.status,
            returned = items.len(),
            "列出考勤"
        );
        Ok(items)
    }

    async fn get(&self, id: &str) -> Result<Attendance> {
        self.latency.wait().await;

        self.store.attendances.get(id).ok_or_else(|| {
            warn!(attendance_id = %id, "考勤记录不存在");
            AttendanceError::not_found(ENTITY)
        })
    }

    async fn create(&self, payload: NewAttendance) -> Result<Attendance> {
        self.latency.wait().await;

        let now = self.latency.now();
        let id = unique_id(&self.store.attendances, ATTENDANCE_PREFIX, now);
        let attendance = payload.into_attendance(id, now);

        info!(
            attendance_id = %attendance.id,
            event_id = %attendance.event_id,
            student_id = %attendance.student_id,
            status = attendance.status.as_str(),
            "创建考勤"
        );

        self.store.attendances.insert(attendance.clone());
        Ok(attendance)
    }

    async fn update(&self, id: &str, patch: AttendancePatch) -> Result<Attendance> {
        self.latency.wait().await;

        let now = self.latency.now();
        let updated = self
            .store
            .attendances
            .update(id, |attendance| {
                patch.apply(attendance);
                attendance.updated_at = Some(now);
            })
            .ok_or_else(|| {
                warn!(attendance_id = %id, "考勤记录不存在，无法更新");
                AttendanceError::not_found(ENTITY)
            })?;

        info!(attendance_id = %id, status = updated.status.as_str(), "更新考勤");
        Ok(updated)
    }

    async fn remove(&self, id: &str) -> Result<Ack> {
        self.latency.wait().await;

        if self.store.attendances.remove(id).is_none() {
            warn!(attendance_id = %id, "考勤记录不存在，无法删除");
            return Err(AttendanceError::not_found(ENTITY));
        }

        info!(attendance_id = %id, "删除考勤");
        Ok(Ack::ok())
    }
}
