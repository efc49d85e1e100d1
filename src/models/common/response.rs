use serde::{Deserialize, Serialize};

// 后端成功响应的统一信封结构
//
// 所有成功响应均为 `{ "message": "...", "data": { ... } }`，
// 各服务层负责从 data 中取出具体资源。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

// 后端错误响应体，message 字段直接展示给用户
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: i64,
    }

    #[test]
    fn test_envelope_unwraps_data() {
        let raw = r#"{ "message": "ok", "data": { "value": 42 } }"#;
        let envelope: DataEnvelope<Payload> = serde_json::from_str(raw).unwrap();
        assert_eq!(envelope.data.value, 42);
        assert_eq!(envelope.message.as_deref(), Some("ok"));
    }

    #[test]
    fn test_envelope_without_message() {
        let raw = r#"{ "data": { "value": 1 } }"#;
        let envelope: DataEnvelope<Payload> = serde_json::from_str(raw).unwrap();
        assert!(envelope.message.is_none());
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
