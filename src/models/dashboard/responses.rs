use serde::{Deserialize, Serialize};

use crate::models::admin::AdminStats;

// 动态条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Enrollment,
    Class,
}

// 首页动态条目
//
// 后端没有 /activities 接口，由客户端从最近的学生和班级数据合成。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub action: String,
    pub details: String,
    // 人类可读的相对时间（"3 minutes ago"）
    pub time: String,
    pub kind: ActivityKind,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 首页聚合数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub stats: AdminStats,
    pub activities: Vec<Activity>,
}
