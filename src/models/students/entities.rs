use serde::{Deserialize, Serialize};

use crate::models::classes::ClassSummary;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    // 学生ID（服务端分配）
    pub id: i64,
    // 姓名
    pub name: String,
    // 年龄（5-25）
    pub age: i64,
    // 所在班级，未入班时为 null
    #[serde(default)]
    pub class_id: Option<i64>,
    // 列表接口附带的班级摘要
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<ClassSummary>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 是否尚未加入任何班级
    pub fn is_unenrolled(&self) -> bool {
        self.class_id.is_none()
    }
}
