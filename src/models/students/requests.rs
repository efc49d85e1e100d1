use serde::Serialize;

// 学生列表查询参数
#[derive(Debug, Clone, Default)]
pub struct StudentListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub class_id: Option<i64>,
}

impl StudentListQuery {
    /// 转换为 URL 查询参数
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(class_id) = self.class_id {
            query.push(("classId".to_string(), class_id.to_string()));
        }
        query
    }
}

// 创建学生请求
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub age: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<i64>,
}

// 更新学生请求（部分字段）
//
// class_id 为双层 Option：外层 None 表示不改动，
// Some(None) 会在请求体中写出显式的 `"classId": null`，即退班。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_id: Option<Option<i64>>,
}

impl UpdateStudentRequest {
    /// 入班：仅设置 classId
    pub fn enroll_into(class_id: i64) -> Self {
        Self {
            class_id: Some(Some(class_id)),
            ..Default::default()
        }
    }

    /// 退班：classId 显式置空
    pub fn unenroll() -> Self {
        Self {
            class_id: Some(None),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_skips_unset_fields() {
        let query = StudentListQuery {
            page: Some(2),
            limit: None,
            class_id: Some(9),
        };
        let pairs = query.to_query();
        assert_eq!(
            pairs,
            vec![
                ("page".to_string(), "2".to_string()),
                ("classId".to_string(), "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_unenroll_serializes_explicit_null() {
        let body = serde_json::to_value(UpdateStudentRequest::unenroll()).unwrap();
        assert_eq!(body, serde_json::json!({ "classId": null }));
    }

    #[test]
    fn test_partial_update_omits_untouched_fields() {
        let request = UpdateStudentRequest {
            age: Some(12),
            ..Default::default()
        };
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(body, serde_json::json!({ "age": 12 }));
    }

    #[test]
    fn test_enroll_serializes_class_id() {
        let body = serde_json::to_value(UpdateStudentRequest::enroll_into(3)).unwrap();
        assert_eq!(body, serde_json::json!({ "classId": 3 }));
    }
}
