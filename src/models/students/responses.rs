use serde::{Deserialize, Serialize};

use super::entities::Student;
use crate::models::common::PagedResult;

// 学生分页列表（GET /students 的 data 部分）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPage {
    pub students: Vec<Student>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl From<StudentPage> for PagedResult<Student> {
    fn from(page: StudentPage) -> Self {
        PagedResult {
            items: page.students,
            page: page.page,
            total_pages: page.total_pages,
            total: page.total,
        }
    }
}

// 单个学生的响应 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentData {
    pub student: Student,
}

// GET /classes/:id/students 的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentListData {
    pub students: Vec<Student>,
}
