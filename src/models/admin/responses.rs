use serde::{Deserialize, Serialize};

use crate::models::users::UserDetails;

// 管理端统计（GET /admin/stats 的 data 部分）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_students: i64,
    pub active_classes: i64,
    pub total_teachers: i64,
    // 入学率，百分比数值
    pub enrollment_rate: f64,
}

impl AdminStats {
    /// 统计拉取失败时的兜底展示值
    pub fn zeroed() -> Self {
        Self {
            total_students: 0,
            active_classes: 0,
            total_teachers: 0,
            enrollment_rate: 0.0,
        }
    }
}

// 教师名下班级里的学生摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherClassStudent {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

// 教师名下的班级
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherClass {
    pub id: i64,
    pub name: String,
    pub section: String,
    pub student_count: i64,
    #[serde(default)]
    pub students: Vec<TeacherClassStudent>,
}

// 教师及其班级、学生的嵌套视图（GET /admin/teachers）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub classes: Vec<TeacherClass>,
}

// GET /admin/teachers、/admin/teachers/available 的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeacherListData<T> {
    #[serde(default)]
    pub teachers: Vec<T>,
}

// GET /admin/users 的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListData {
    #[serde(default)]
    pub users: Vec<UserDetails>,
}
