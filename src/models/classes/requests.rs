use serde::Serialize;

// 创建班级请求
#[derive(Debug, Clone, Serialize)]
pub struct CreateClassRequest {
    pub name: String,
    pub section: String,
}

// 更新班级请求（部分字段）
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateClassRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

// 入班请求（POST /classes/:id/enroll）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollStudentRequest {
    pub student_id: i64,
}

// 指派教师请求（PUT /classes/:id/assign-teacher）
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignTeacherRequest {
    pub teacher_id: i64,
}
