use std::sync::Arc;

use crate::cache::{Clock, CollectionCache, SystemClock};
use crate::client::{ApiClient, FileTokenStore, HttpTransport, ReqwestTransport, TokenStore};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::classes::Class;
use crate::models::students::Student;
use crate::services::{
    AdminService, AuthService, AuthTimeouts, ClassesService, DashboardService, StudentsService,
};

/// 会话上下文：每次进程启动构造一次，页面层共享
///
/// 缓存不是模块级全局状态，而是随上下文构造的显式对象；
/// 时钟与传输层可注入，测试替换为确定性实现。
pub struct AppContext {
    pub config: AppConfig,
    pub auth: AuthService,
    pub students: StudentsService,
    pub classes: ClassesService,
    pub admin: AdminService,
    pub dashboard: DashboardService,
    pub students_cache: CollectionCache<Student>,
    pub classes_cache: CollectionCache<Class>,
    api: Arc<ApiClient>,
}

impl AppContext {
    /// 按配置构造生产环境上下文
    pub fn new(config: AppConfig) -> Result<Self> {
        let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new(
            &config.api.base_url,
            std::time::Duration::from_secs(config.api.timeouts.request),
        )?);
        let tokens: Arc<dyn TokenStore> =
            Arc::new(FileTokenStore::new(config.credentials_path()));
        Ok(Self::with_parts(config, transport, tokens, SystemClock::shared()))
    }

    /// 显式注入各依赖（测试入口）
    pub fn with_parts(
        config: AppConfig,
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let api = Arc::new(ApiClient::new(transport, tokens));
        let timeouts = AuthTimeouts {
            login: std::time::Duration::from_secs(config.api.timeouts.login),
            register: std::time::Duration::from_secs(config.api.timeouts.register),
            profile: std::time::Duration::from_secs(config.api.timeouts.profile),
        };
        let ttl_ms = config.cache.collection_ttl_ms;

        Self {
            auth: AuthService::with_timeouts(api.clone(), timeouts),
            students: StudentsService::new(api.clone()),
            classes: ClassesService::new(api.clone()),
            admin: AdminService::new(api.clone()),
            dashboard: DashboardService::new(api.clone(), clock.clone()),
            students_cache: CollectionCache::new("students", ttl_ms, clock.clone()),
            classes_cache: CollectionCache::new("classes", ttl_ms, clock),
            config,
            api,
        }
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// 读取学生全量集合（命中缓存或整表抓取）
    pub async fn all_students(&self) -> Result<Arc<Vec<Student>>> {
        let limit = self.config.api.fetch_limit;
        self.students_cache
            .get_all(|page| self.students.fetch_page(page, limit))
            .await
    }

    /// 读取班级全量集合
    pub async fn all_classes(&self) -> Result<Arc<Vec<Class>>> {
        self.classes_cache
            .get_all(|page| self.classes.fetch_page(page))
            .await
    }

    /// 任何变更操作之后调用：两类集合一起失效
    ///
    /// 入班/退班同时影响学生的 classId 和班级的 studentCount，
    /// 失效不做部分更新，统一整体丢弃。
    pub async fn invalidate_collections(&self) {
        self.students_cache.invalidate().await;
        self.classes_cache.invalidate().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MemoryTokenStore;
    use crate::client::transport::testing::MockTransport;
    use crate::cache::clock::testing::ManualClock;
    use serde_json::json;

    fn test_context(transport: Arc<MockTransport>) -> AppContext {
        AppContext::with_parts(
            AppConfig::default(),
            transport,
            Arc::new(MemoryTokenStore::with_tokens("tok", "refresh")),
            Arc::new(ManualClock::starting_at(0)),
        )
    }

    fn students_page(ids: &[i64], page: i64, total_pages: i64) -> serde_json::Value {
        let students: Vec<_> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "name": format!("S{id}"),
                    "age": 10,
                    "classId": null,
                    "createdAt": "2026-01-01T00:00:00Z",
                    "updatedAt": "2026-01-01T00:00:00Z"
                })
            })
            .collect();
        json!({
            "data": {
                "students": students,
                "total": ids.len(),
                "page": page,
                "limit": 100,
                "totalPages": total_pages
            }
        })
    }

    #[tokio::test]
    async fn test_all_students_aggregates_backend_pages() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, students_page(&[1, 2], 1, 3));
        transport.push_json(200, students_page(&[3, 4], 2, 3));
        transport.push_json(200, students_page(&[5], 3, 3));
        let context = test_context(transport.clone());

        let students = context.all_students().await.unwrap();
        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(transport.request_count(), 3);

        // 有效期内的第二次读取不再发请求
        let again = context.all_students().await.unwrap();
        assert_eq!(again.len(), 5);
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_invalidate_collections_forces_refetch() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, students_page(&[1], 1, 1));
        transport.push_json(200, students_page(&[1, 2], 1, 1));
        let context = test_context(transport.clone());

        assert_eq!(context.all_students().await.unwrap().len(), 1);
        context.invalidate_collections().await;
        assert_eq!(context.all_students().await.unwrap().len(), 2);
        assert_eq!(transport.request_count(), 2);
    }
}
