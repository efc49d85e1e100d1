use serde::{Deserialize, Serialize};

use super::entities::{Class, EnrolledClass};

// 班级列表的 data 部分（/classes 不分页，一次性返回全量）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassListData {
    #[serde(default)]
    pub classes: Vec<Class>,
}

// 单个班级的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassData {
    pub class: Class,
}

// GET /students/me/classes 的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyClassesData {
    #[serde(default)]
    pub classes: Vec<EnrolledClass>,
}
