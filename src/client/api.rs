use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::client::tokens::TokenStore;
use crate::client::transport::{ApiRequest, ApiResponseParts, HttpTransport};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::{RefreshData, RefreshTokenRequest};
use crate::models::common::{DataEnvelope, ErrorBody};

/// REST API 客户端
///
/// 为每个请求附加存储的 access token；遇到 401 时最多刷新一次
/// 并重试原请求，刷新失败即清空本地凭证，由调用方引导重新登录。
/// 其余状态码一律不重试，也没有退避逻辑。
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { transport, tokens }
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    /// GET 并取出信封中的 data
    pub async fn get_data<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Vec<(String, String)>,
    ) -> Result<T> {
        let parts = self
            .send_with_refresh(ApiRequest::get(path).with_query(query))
            .await?;
        Self::unwrap_envelope(parts)
    }

    /// POST 并取出信封中的 data
    pub async fn post_data<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let parts = self
            .send_with_refresh(ApiRequest::post(path).with_body(serde_json::to_value(body)?))
            .await?;
        Self::unwrap_envelope(parts)
    }

    /// PUT 并取出信封中的 data
    pub async fn put_data<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let parts = self
            .send_with_refresh(ApiRequest::put(path).with_body(serde_json::to_value(body)?))
            .await?;
        Self::unwrap_envelope(parts)
    }

    /// DELETE 并取出信封中的 data
    pub async fn delete_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let parts = self.send_with_refresh(ApiRequest::delete(path)).await?;
        Self::unwrap_envelope(parts)
    }

    /// POST，忽略响应体
    pub async fn post_empty(&self, path: &str, body: &impl Serialize) -> Result<()> {
        self.send_with_refresh(ApiRequest::post(path).with_body(serde_json::to_value(body)?))
            .await?;
        Ok(())
    }

    /// 不带请求体的 POST，忽略响应体
    pub async fn post_bare(&self, path: &str) -> Result<()> {
        self.send_with_refresh(ApiRequest::post(path)).await?;
        Ok(())
    }

    /// DELETE，忽略响应体
    pub async fn delete_empty(&self, path: &str) -> Result<()> {
        self.send_with_refresh(ApiRequest::delete(path)).await?;
        Ok(())
    }

    fn unwrap_envelope<T: DeserializeOwned>(parts: ApiResponseParts) -> Result<T> {
        let envelope: DataEnvelope<T> = serde_json::from_str(&parts.body)?;
        Ok(envelope.data)
    }

    // 发送请求；首个 401 触发一次刷新-重试
    async fn send_with_refresh(&self, request: ApiRequest) -> Result<ApiResponseParts> {
        let bearer = self.tokens.load()?.map(|t| t.access_token);
        let first = self
            .transport
            .execute(request.clone().with_bearer(bearer))
            .await?;

        if first.status != 401 {
            return Self::check_status(first);
        }

        let Some(stored) = self.tokens.load()? else {
            // 没有刷新凭证，401 原样上抛
            return Self::check_status(first);
        };

        debug!(path = %request.path, "Received 401, attempting token refresh");
        match self.refresh_access_token(&stored.refresh_token).await {
            Ok(access_token) => {
                let retried = self
                    .transport
                    .execute(request.with_bearer(Some(access_token)))
                    .await?;
                Self::check_status(retried)
            }
            Err(e) => {
                // 刷新也失败：清空凭证，不再重试，调用方引导重新登录
                warn!(error = %e, "Token refresh failed, clearing stored credentials");
                if let Err(clear_err) = self.tokens.clear() {
                    warn!(error = %clear_err, "Failed to clear stored credentials");
                }
                Err(SchoolAdminError::authentication(
                    "Session expired, please log in again",
                ))
            }
        }
    }

    // 用 refresh token 换发新的 access token（请求本身不携带 bearer）
    async fn refresh_access_token(&self, refresh_token: &str) -> Result<String> {
        let body = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        let request = ApiRequest::post("/auth/refresh").with_body(serde_json::to_value(&body)?);
        let parts = Self::check_status(self.transport.execute(request).await?)?;
        let envelope: DataEnvelope<RefreshData> = serde_json::from_str(&parts.body)?;
        let access_token = envelope.data.tokens.access_token;
        self.tokens.update_access_token(&access_token)?;
        Ok(access_token)
    }

    // 非 2xx 状态码映射到错误分类，业务 message 原样保留
    fn check_status(parts: ApiResponseParts) -> Result<ApiResponseParts> {
        if parts.is_success() {
            return Ok(parts);
        }

        let message = serde_json::from_str::<ErrorBody>(&parts.body)
            .ok()
            .and_then(|body| body.message)
            .unwrap_or_else(|| format!("Request failed with status {}", parts.status));

        Err(match parts.status {
            401 => SchoolAdminError::authentication(message),
            403 => SchoolAdminError::authorization(message),
            404 => SchoolAdminError::not_found(message),
            400..=499 => SchoolAdminError::validation(message),
            _ => SchoolAdminError::api(message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tokens::MemoryTokenStore;
    use crate::client::transport::testing::MockTransport;
    use serde_json::json;

    fn client_with(
        transport: Arc<MockTransport>,
        tokens: Arc<MemoryTokenStore>,
    ) -> ApiClient {
        ApiClient::new(transport, tokens)
    }

    #[tokio::test]
    async fn test_bearer_token_attached_from_store() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(200, json!({ "data": { "value": 1 } }));
        let tokens = Arc::new(MemoryTokenStore::with_tokens("tok-123", "refresh"));
        let client = client_with(transport.clone(), tokens);

        #[derive(serde::Deserialize)]
        struct Value {
            value: i64,
        }
        let value: Value = client.get_data("/students/1", Vec::new()).await.unwrap();

        assert_eq!(value.value, 1);
        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].bearer.as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn test_401_triggers_exactly_one_refresh_and_retry() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({ "message": "Token expired" }));
        transport.push_json(
            200,
            json!({ "data": { "tokens": { "accessToken": "new-access" } } }),
        );
        transport.push_json(200, json!({ "data": { "value": 9 } }));

        let tokens = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh-1"));
        let client = client_with(transport.clone(), tokens.clone());

        #[derive(serde::Deserialize)]
        struct Value {
            value: i64,
        }
        let value: Value = client.get_data("/classes", Vec::new()).await.unwrap();
        assert_eq!(value.value, 9);

        let requests = transport.requests();
        assert_eq!(requests.len(), 3);
        // 刷新请求不携带 bearer，且带上 refresh token
        assert_eq!(requests[1].path, "/auth/refresh");
        assert!(requests[1].bearer.is_none());
        assert_eq!(
            requests[1].body.as_ref().unwrap()["refreshToken"],
            json!("refresh-1")
        );
        // 重试请求使用新的 access token
        assert_eq!(requests[2].bearer.as_deref(), Some("new-access"));

        let stored = tokens.load().unwrap().unwrap();
        assert_eq!(stored.access_token, "new-access");
        assert_eq!(stored.refresh_token, "refresh-1");
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_credentials_without_looping() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({ "message": "Token expired" }));
        transport.push_json(401, json!({ "message": "Refresh token expired" }));

        let tokens = Arc::new(MemoryTokenStore::with_tokens("stale", "dead-refresh"));
        let client = client_with(transport.clone(), tokens.clone());

        let result: Result<serde_json::Value> = client.get_data("/students", Vec::new()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, SchoolAdminError::Authentication(_)));

        // 原请求 + 一次刷新，绝不循环
        assert_eq!(transport.request_count(), 2);
        assert!(tokens.load().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_401_without_stored_tokens_surfaces_directly() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({ "message": "Unauthorized" }));
        let tokens = Arc::new(MemoryTokenStore::new());
        let client = client_with(transport.clone(), tokens);

        let result: Result<serde_json::Value> = client.get_data("/students", Vec::new()).await;
        assert!(matches!(
            result.unwrap_err(),
            SchoolAdminError::Authentication(_)
        ));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_retried_401_maps_to_authentication_error() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(401, json!({ "message": "Token expired" }));
        transport.push_json(
            200,
            json!({ "data": { "tokens": { "accessToken": "fresh" } } }),
        );
        transport.push_json(401, json!({ "message": "Still unauthorized" }));

        let tokens = Arc::new(MemoryTokenStore::with_tokens("stale", "refresh"));
        let client = client_with(transport.clone(), tokens);

        let result: Result<serde_json::Value> = client.get_data("/students", Vec::new()).await;
        assert!(matches!(
            result.unwrap_err(),
            SchoolAdminError::Authentication(_)
        ));
        // 原请求 + 刷新 + 一次重试，到此为止
        assert_eq!(transport.request_count(), 3);
    }

    #[tokio::test]
    async fn test_business_error_message_preserved_verbatim() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(
            400,
            json!({ "message": "Class \"Math - 10-A\" is full" }),
        );
        let tokens = Arc::new(MemoryTokenStore::with_tokens("tok", "refresh"));
        let client = client_with(transport.clone(), tokens);

        let result: Result<serde_json::Value> = client
            .post_data("/classes/1/enroll", &json!({ "studentId": 2 }))
            .await;
        let err = result.unwrap_err();
        assert!(matches!(err, SchoolAdminError::Validation(_)));
        assert_eq!(err.message(), "Class \"Math - 10-A\" is full");
        assert!(err.is_capacity_related());
    }

    #[tokio::test]
    async fn test_404_maps_to_not_found() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(404, json!({ "message": "Student not found" }));
        let tokens = Arc::new(MemoryTokenStore::with_tokens("tok", "refresh"));
        let client = client_with(transport.clone(), tokens);

        let result: Result<serde_json::Value> = client.get_data("/students/99", Vec::new()).await;
        assert!(matches!(result.unwrap_err(), SchoolAdminError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_5xx_without_message_gets_generic_fallback() {
        let transport = Arc::new(MockTransport::new());
        transport.push_json(500, json!({}));
        let tokens = Arc::new(MemoryTokenStore::with_tokens("tok", "refresh"));
        let client = client_with(transport.clone(), tokens);

        let result: Result<serde_json::Value> = client.get_data("/admin/stats", Vec::new()).await;
        let err = result.unwrap_err();
        assert!(matches!(err, SchoolAdminError::Api(_)));
        assert_eq!(err.message(), "Request failed with status 500");
    }
}
