use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::admin::{AdminStats, TeacherDetails, TeacherListData, UserListData};
use crate::models::users::UserDetails;

/// 管理端聚合服务
pub struct AdminService {
    api: Arc<ApiClient>,
}

impl AdminService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 全局统计
    pub async fn stats(&self) -> Result<AdminStats> {
        self.api.get_data("/admin/stats", Vec::new()).await
    }

    /// 全部教师及其班级、学生的嵌套视图
    pub async fn teachers_with_details(&self) -> Result<Vec<TeacherDetails>> {
        let data: TeacherListData<TeacherDetails> =
            self.api.get_data("/admin/teachers", Vec::new()).await?;
        Ok(data.teachers)
    }

    /// 全部用户
    pub async fn all_users(&self) -> Result<Vec<UserDetails>> {
        let data: UserListData = self.api.get_data("/admin/users", Vec::new()).await?;
        Ok(data.users)
    }

    /// 还有带班余量的教师（sectionCount 未达上限）
    pub async fn available_teachers(&self) -> Result<Vec<UserDetails>> {
        let data: TeacherListData<UserDetails> = self
            .api
            .get_data("/admin/teachers/available", Vec::new())
            .await?;
        Ok(data.teachers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryTokenStore;
    use crate::client::transport::testing::MockTransport;
    use serde_json::json;

    fn service_with(transport: Arc<MockTransport>) -> AdminService {
        let tokens = Arc::new(MemoryTokenStore::with_tokens("tok", "refresh"));
        AdminService::new(Arc::new(ApiClient::new(transport, tokens)))
    }

    #[tokio::test]
    async fn test_stats_deserializes_camel_case() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({
                "data": {
                    "totalStudents": 42,
                    "activeClasses": 9,
                    "totalTeachers": 6,
                    "enrollmentRate": 87.5
                }
            }),
        );
        let service = service_with(transport);

        let stats = service.stats().await.unwrap();
        assert_eq!(stats.total_students, 42);
        assert_eq!(stats.enrollment_rate, 87.5);
    }

    #[tokio::test]
    async fn test_teachers_with_details_nested_shape() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({
                "data": {
                    "teachers": [{
                        "id": 1,
                        "name": "T",
                        "email": "t@example.com",
                        "role": "teacher",
                        "createdAt": "2026-01-01T00:00:00Z",
                        "classes": [{
                            "id": 2,
                            "name": "Math",
                            "section": "10-A",
                            "studentCount": 2,
                            "students": [{ "id": 5, "name": "S", "age": 11 }]
                        }]
                    }]
                }
            }),
        );
        let service = service_with(transport);

        let teachers = service.teachers_with_details().await.unwrap();
        assert_eq!(teachers[0].classes[0].students[0].id, 5);
    }

    #[tokio::test]
    async fn test_available_teachers_carry_section_count() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            200,
            json!({
                "data": {
                    "teachers": [{
                        "id": 1,
                        "name": "T",
                        "email": "t@example.com",
                        "role": "teacher",
                        "createdAt": "2026-01-01T00:00:00Z",
                        "sectionCount": 4
                    }]
                }
            }),
        );
        let service = service_with(transport);

        let teachers = service.available_teachers().await.unwrap();
        assert_eq!(teachers[0].section_count, Some(4));
    }
}
