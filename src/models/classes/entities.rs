use serde::{Deserialize, Serialize};

// 班级任课教师摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassTeacher {
    pub id: i64,
    pub name: String,
    pub email: String,
}

// 班级实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub name: String,
    // 分班（如 "10-A"）
    pub section: String,
    // 任课教师，未分配时为 null
    #[serde(default)]
    pub teacher_id: Option<i64>,
    // 在读人数（服务端派生字段，列表接口才会带上）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_count: Option<i64>,
    // 任课教师摘要
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher: Option<ClassTeacher>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生列表里内嵌的班级摘要
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub section: String,
}

// 学生视角的班级（GET /students/me/classes）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledClass {
    pub id: i64,
    pub name: String,
    pub section: String,
    #[serde(default)]
    pub teacher: Option<ClassTeacher>,
    pub student_count: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Class {
    /// "名称 - 分班" 的展示形式
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name, self.section)
    }
}
