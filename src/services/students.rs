use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::classes::EnrolledClass;
use crate::models::classes::MyClassesData;
use crate::models::common::PagedResult;
use crate::models::students::{
    CreateStudentRequest, Student, StudentData, StudentListQuery, StudentPage,
    UpdateStudentRequest,
};

/// 学生资源服务：对 REST 接口的类型化封装，无业务逻辑
pub struct StudentsService {
    api: Arc<ApiClient>,
}

impl StudentsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 分页列出学生，可按班级过滤
    pub async fn list(&self, query: &StudentListQuery) -> Result<StudentPage> {
        self.api.get_data("/students", query.to_query()).await
    }

    /// 供集合缓存逐页聚合使用
    pub async fn fetch_page(&self, page: i64, limit: i64) -> Result<PagedResult<Student>> {
        let query = StudentListQuery {
            page: Some(page),
            limit: Some(limit),
            class_id: None,
        };
        Ok(self.list(&query).await?.into())
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        let data: StudentData = self
            .api
            .get_data(&format!("/students/{id}"), Vec::new())
            .await?;
        Ok(data.student)
    }

    pub async fn create(&self, request: &CreateStudentRequest) -> Result<Student> {
        let data: StudentData = self.api.post_data("/students", request).await?;
        Ok(data.student)
    }

    pub async fn update(&self, id: i64, request: &UpdateStudentRequest) -> Result<Student> {
        let data: StudentData = self
            .api
            .put_data(&format!("/students/{id}"), request)
            .await?;
        Ok(data.student)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_empty(&format!("/students/{id}")).await
    }

    /// 退班：classId 显式置空
    pub async fn unenroll(&self, id: i64) -> Result<Student> {
        self.update(id, &UpdateStudentRequest::unenroll()).await
    }

    /// 学生视角：我所在的班级
    pub async fn my_classes(&self) -> Result<Vec<EnrolledClass>> {
        let data: MyClassesData = self
            .api
            .get_data("/students/me/classes", Vec::new())
            .await?;
        Ok(data.classes)
    }
}
