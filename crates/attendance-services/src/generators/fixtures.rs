//! 固定样例数据
//!
//! 开发与测试使用的确定性数据：两个事件、两条考勤、两个班级。
//! 结构固定，只有生成的 id 和时间戳随运行变化。

use chrono::{DateTime, Duration, Utc};

use crate::models::{
    Attendance, AttendanceStatus, Class, Device, DeviceStatus, EventItem, NewAttendance, Student,
    Teacher,
};
use crate::store::id::{ATTENDANCE_PREFIX, DEVICE_PREFIX, EVENT_PREFIX, generate_id};

pub const CLASS_MORNING_ID: &str = "class-1";
pub const CLASS_AFTERNOON_ID: &str = "class-2";
pub const STUDENT_WITH_DEVICE_ID: &str = "stu-1";
pub const STUDENT_WITHOUT_DEVICE_ID: &str = "stu-2";
pub const MOCK_TEACHER_ID: &str = "mock-teacher-1";

/// 样例事件
///
/// 一小时后开始的开学第一课，以及一天后的家长会
pub fn sample_events(now: DateTime<Utc>) -> Vec<EventItem> {
    vec![
        EventItem {
            id: generate_id(EVENT_PREFIX, now),
            title: "Aula inaugural".to_string(),
            description: Some("Primeira aula do semestre".to_string()),
            starts_at: now + Duration::hours(1),
            ends_at: None,
            class_id: Some(CLASS_MORNING_ID.to_string()),
            created_at: now,
            updated_at: None,
        },
        EventItem {
            id: generate_id(EVENT_PREFIX, now),
            title: "Reunião de pais".to_string(),
            description: Some("Encontro para conversas".to_string()),
            starts_at: now + Duration::hours(24),
            ends_at: None,
            class_id: Some(CLASS_AFTERNOON_ID.to_string()),
            created_at: now,
            updated_at: None,
        },
    ]
}

/// 样例考勤：两名学生在同一事件中，一人出勤一人缺勤
pub fn sample_attendances(event_id: &str, now: DateTime<Utc>) -> Vec<Attendance> {
    [
        (STUDENT_WITH_DEVICE_ID, "Aluno 1", AttendanceStatus::Present),
        (STUDENT_WITHOUT_DEVICE_ID, "Aluno 2", AttendanceStatus::Absent),
    ]
    .into_iter()
    .map(|(student_id, name, status)| {
        let mut attendance = NewAttendance::new(event_id, student_id, status)
            .into_attendance(generate_id(ATTENDANCE_PREFIX, now), now);
        attendance.student_name = Some(name.to_string());
        attendance.created_at = None;
        attendance
    })
    .collect()
}

/// 样例班级
///
/// 第一个班级有两名学生（一人绑定设备，一人未绑定），第二个班级为空
pub fn sample_classes(now: DateTime<Utc>) -> Vec<Class> {
    let device = Device {
        id: generate_id(DEVICE_PREFIX, now),
        device_id: "AA:BB:CC:DD:EE:01".to_string(),
        user_id: STUDENT_WITH_DEVICE_ID.to_string(),
        status: DeviceStatus::Active,
        last_seen: Some(now),
        created_at: now,
        updated_at: None,
    };

    vec![
        Class {
            id: CLASS_MORNING_ID.to_string(),
            name: "Turma U BES - Manhã".to_string(),
            code: "UBES-M1".to_string(),
            institution_id: "inst-1".to_string(),
            teacher_id: "teacher-1".to_string(),
            students: vec![
                Student {
                    id: STUDENT_WITH_DEVICE_ID.to_string(),
                    name: "Aluno 1".to_string(),
                    email: "aluno1@example.com".to_string(),
                    document: "123.456.789-00".to_string(),
                    device: Some(device),
                    created_at: now,
                    updated_at: None,
                },
                Student {
                    id: STUDENT_WITHOUT_DEVICE_ID.to_string(),
                    name: "Aluno 2".to_string(),
                    email: "aluno2@example.com".to_string(),
                    document: "987.654.321-00".to_string(),
                    device: None,
                    created_at: now,
                    updated_at: None,
                },
            ],
            created_at: now,
            updated_at: None,
        },
        Class {
            id: CLASS_AFTERNOON_ID.to_string(),
            name: "Matemática - Vespertino".to_string(),
            code: "MAT-V".to_string(),
            institution_id: "inst-1".to_string(),
            teacher_id: "teacher-1".to_string(),
            students: Vec::new(),
            created_at: now,
            updated_at: None,
        },
    ]
}

/// 模拟登录返回的固定教师
pub fn mock_teacher(now: DateTime<Utc>) -> Teacher {
    Teacher {
        id: MOCK_TEACHER_ID.to_string(),
        name: "Mock Teacher".to_string(),
        email: "mock.teacher@example.com".to_string(),
        document: "00000000000".to_string(),
        created_at: now,
        updated_at: now,
    }
}
