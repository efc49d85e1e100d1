use std::sync::Arc;
use std::time::Duration;

use tokio::time::timeout;
use tracing::{info, warn};

use crate::client::{ApiClient, StoredTokens};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::{AuthData, LoginRequest, ProfileData, RegisterRequest};
use crate::models::users::{User, UserRole};

/// 认证相关请求的固定超时，防止登录界面无限等待
#[derive(Debug, Clone)]
pub struct AuthTimeouts {
    pub login: Duration,
    pub register: Duration,
    pub profile: Duration,
}

impl Default for AuthTimeouts {
    fn default() -> Self {
        Self {
            login: Duration::from_secs(10),
            register: Duration::from_secs(10),
            profile: Duration::from_secs(5),
        }
    }
}

/// 认证服务
pub struct AuthService {
    api: Arc<ApiClient>,
    timeouts: AuthTimeouts,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            api,
            timeouts: AuthTimeouts::default(),
        }
    }

    pub fn with_timeouts(api: Arc<ApiClient>, timeouts: AuthTimeouts) -> Self {
        Self { api, timeouts }
    }

    /// 登录并持久化令牌对
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let data: AuthData = timeout(
            self.timeouts.login,
            self.api.post_data("/auth/login", &request),
        )
        .await
        .map_err(|_| SchoolAdminError::timeout("Login request timeout"))??;

        self.store_token_pair(&data)?;
        info!(user = %data.user.email, "Logged in successfully");
        Ok(data.user)
    }

    /// 注册并持久化令牌对
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<User> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        let data: AuthData = timeout(
            self.timeouts.register,
            self.api.post_data("/auth/register", &request),
        )
        .await
        .map_err(|_| SchoolAdminError::timeout("Register request timeout"))??;

        self.store_token_pair(&data)?;
        info!(user = %data.user.email, "Registered successfully");
        Ok(data.user)
    }

    /// 获取当前登录用户
    pub async fn profile(&self) -> Result<User> {
        let data: ProfileData = timeout(
            self.timeouts.profile,
            self.api.get_data("/auth/profile", Vec::new()),
        )
        .await
        .map_err(|_| SchoolAdminError::timeout("Profile request timeout"))??;
        Ok(data.user)
    }

    /// 登出：服务端调用失败也必须清掉本地令牌
    pub async fn logout(&self) -> Result<()> {
        if let Err(e) = self.api.post_bare("/auth/logout").await {
            warn!(error = %e, "Server-side logout failed, clearing local tokens anyway");
        }
        self.api.token_store().clear()
    }

    /// 本地是否存有凭证
    pub fn is_authenticated(&self) -> Result<bool> {
        Ok(self.api.token_store().load()?.is_some())
    }

    fn store_token_pair(&self, data: &AuthData) -> Result<()> {
        let refresh_token = data.tokens.refresh_token.clone().ok_or_else(|| {
            SchoolAdminError::serialization("Auth response missing refresh token")
        })?;
        self.api.token_store().store(&StoredTokens {
            access_token: data.tokens.access_token.clone(),
            refresh_token,
        })
    }
}
