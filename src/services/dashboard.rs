use std::sync::Arc;

use tracing::error;

use crate::cache::Clock;
use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::admin::AdminStats;
use crate::models::classes::ClassListData;
use crate::models::dashboard::{Activity, ActivityKind, DashboardData};
use crate::models::students::{StudentListQuery, StudentPage};

// 合成动态时每类数据各取最近几条
const RECENT_PER_KIND: usize = 5;
// 动态列表总条数上限
const ACTIVITY_LIMIT: usize = 10;
// 抓取最近学生时的页大小
const RECENT_STUDENTS_LIMIT: i64 = 50;

/// 首页聚合服务
///
/// 后端没有动态接口，动态列表由最近创建的学生和班级合成；
/// 统计直接复用管理端接口。
pub struct DashboardService {
    api: Arc<ApiClient>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(api: Arc<ApiClient>, clock: Arc<dyn Clock>) -> Self {
        Self { api, clock }
    }

    /// 首页统计；失败时记录并返回全零兜底值，不让首页整体报错
    pub async fn stats(&self) -> AdminStats {
        match self.api.get_data("/admin/stats", Vec::new()).await {
            Ok(stats) => stats,
            Err(e) => {
                error!(error = %e, "Failed to fetch dashboard stats");
                AdminStats::zeroed()
            }
        }
    }

    /// 最近动态：按创建时间倒序合并学生与班级，截断到 10 条
    pub async fn recent_activity(&self) -> Result<Vec<Activity>> {
        let students_query = StudentListQuery {
            page: Some(1),
            limit: Some(RECENT_STUDENTS_LIMIT),
            class_id: None,
        };
        let students: StudentPage = self
            .api
            .get_data("/students", students_query.to_query())
            .await?;
        let classes: ClassListData = self.api.get_data("/classes", Vec::new()).await?;

        let now = self.clock.now();
        let mut activities = Vec::new();

        let mut recent_students = students.students;
        recent_students.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for student in recent_students.into_iter().take(RECENT_PER_KIND) {
            let details = match &student.class {
                Some(class) => format!("{} joined the school in {}", student.name, class.name),
                None => format!("{} joined the school", student.name),
            };
            activities.push(Activity {
                id: activities.len() as i64 + 1,
                action: "New student enrolled".to_string(),
                details,
                time: crate::utils::time_ago(student.created_at, now),
                kind: ActivityKind::Enrollment,
                created_at: student.created_at,
            });
        }

        let mut recent_classes = classes.classes;
        recent_classes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        for class in recent_classes.into_iter().take(RECENT_PER_KIND) {
            activities.push(Activity {
                id: activities.len() as i64 + 1,
                action: "New class created".to_string(),
                details: format!(
                    "{} - {} was added to the system",
                    class.name, class.section
                ),
                time: crate::utils::time_ago(class.created_at, now),
                kind: ActivityKind::Class,
                created_at: class.created_at,
            });
        }

        activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        activities.truncate(ACTIVITY_LIMIT);
        Ok(activities)
    }

    /// 统计与动态并发拉取；动态失败退化为空列表
    pub async fn dashboard_data(&self) -> DashboardData {
        let (stats, activities) = futures_util::join!(self.stats(), self.recent_activity());
        let activities = activities.unwrap_or_else(|e| {
            error!(error = %e, "Failed to synthesize recent activity");
            Vec::new()
        });
        DashboardData { stats, activities }
    }
}
