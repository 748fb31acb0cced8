//! 内存班级服务
//!
//! 模拟层不按教师过滤班级，始终返回全部班级。
//! 设备重置按班级、学生顺序线性扫描，真实后端应按学生 id 建立索引。

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use attendance_shared::{AttendanceError, Result};

use crate::api::ClassesApi;
use crate::clock::Latency;
use crate::models::{Ack, Class};
use crate::store::MockStore;

/// 班级服务
#[derive(Debug, Clone)]
pub struct ClassesService {
    store: Arc<MockStore>,
    latency: Latency,
}

impl ClassesService {
    pub fn new(store: Arc<MockStore>, latency: Latency) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl ClassesApi for ClassesService {
    async fn get_my_classes(&self) -> Result<Vec<Class>> {
        self.latency.wait().await;

        let classes = self.store.classes.list();
        info!(returned = classes.len(), "列出班级");
        Ok(classes)
    }

    async fn get_class_by_id(&self, id: &str) -> Result<Class> {
        self.latency.wait().await;

        self.store.classes.get(id).ok_or_else(|| {
            warn!(class_id = %id, "班级不存在");
            AttendanceError::not_found("Class")
        })
    }

    async fn reset_student_device(&self, student_id: &str) -> Result<Ack> {
        self.latency.wait().await;

        // 第一个匹配的学生决定结果：Some(None) 表示学生存在但未绑定设备
        let found = self.store.classes.find_map_mut(|class| {
            let class_id = class.id.clone();
            class
                .student_mut(student_id)
                .map(|student| (class_id, student.device.take()))
        });

        match found {
            Some((class_id, Some(device))) => {
                info!(
                    student_id = %student_id,
                    class_id = %class_id,
                    device_id = %device.device_id,
                    "已重置学生设备"
                );
                Ok(Ack::ok())
            }
            Some((class_id, None)) => {
                warn!(student_id = %student_id, class_id = %class_id, "学生未绑定设备");
                Err(AttendanceError::not_found("Device"))
            }
            None => {
                warn!(student_id = %student_id, "学生不存在");
                Err(AttendanceError::not_found("Student"))
            }
        }
    }
}
