use std::sync::Arc;

use crate::client::ApiClient;
use crate::errors::Result;
use crate::models::classes::{
    AssignTeacherRequest, Class, ClassData, ClassListData, CreateClassRequest,
    EnrollStudentRequest, UpdateClassRequest,
};
use crate::models::common::PagedResult;
use crate::models::students::{Student, StudentListData};

/// 班级资源服务
pub struct ClassesService {
    api: Arc<ApiClient>,
}

impl ClassesService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// 班级列表（接口一次性返回全量）
    pub async fn list(&self) -> Result<Vec<Class>> {
        let data: ClassListData = self.api.get_data("/classes", Vec::new()).await?;
        Ok(data.classes)
    }

    /// 供集合缓存使用：包装成单页结果
    pub async fn fetch_page(&self, _page: i64) -> Result<PagedResult<Class>> {
        Ok(PagedResult::single_page(self.list().await?))
    }

    pub async fn get(&self, id: i64) -> Result<Class> {
        let data: ClassData = self
            .api
            .get_data(&format!("/classes/{id}"), Vec::new())
            .await?;
        Ok(data.class)
    }

    /// 班级在读学生
    pub async fn students(&self, id: i64) -> Result<Vec<Student>> {
        let data: StudentListData = self
            .api
            .get_data(&format!("/classes/{id}/students"), Vec::new())
            .await?;
        Ok(data.students)
    }

    pub async fn create(&self, request: &CreateClassRequest) -> Result<Class> {
        let data: ClassData = self.api.post_data("/classes", request).await?;
        Ok(data.class)
    }

    pub async fn update(&self, id: i64, request: &UpdateClassRequest) -> Result<Class> {
        let data: ClassData = self
            .api
            .put_data(&format!("/classes/{id}"), request)
            .await?;
        Ok(data.class)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.api.delete_empty(&format!("/classes/{id}")).await
    }

    /// 学生入班；班级已满时服务端拒绝
    pub async fn enroll_student(&self, class_id: i64, student_id: i64) -> Result<()> {
        self.api
            .post_empty(
                &format!("/classes/{class_id}/enroll"),
                &EnrollStudentRequest { student_id },
            )
            .await
    }

    /// 指派教师；教师课时已满或班级已有教师时服务端拒绝
    pub async fn assign_teacher(&self, class_id: i64, teacher_id: i64) -> Result<Class> {
        let data: ClassData = self
            .api
            .put_data(
                &format!("/classes/{class_id}/assign-teacher"),
                &AssignTeacherRequest { teacher_id },
            )
            .await?;
        Ok(data.class)
    }

    pub async fn remove_teacher(&self, class_id: i64) -> Result<Class> {
        let data: ClassData = self
            .api
            .delete_data(&format!("/classes/{class_id}/remove-teacher"))
            .await?;
        Ok(data.class)
    }
}
