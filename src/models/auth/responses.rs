use serde::{Deserialize, Serialize};

use crate::models::users::User;

// 登录/注册返回的令牌对
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    // 刷新响应里只有新的 accessToken
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

// 登录/注册响应的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub tokens: TokenPair,
}

// 刷新令牌响应的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshData {
    pub tokens: TokenPair,
}

// GET /auth/profile 的 data 部分
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub user: User,
}
