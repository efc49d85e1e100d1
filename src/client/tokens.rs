use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

use crate::errors::{Result, SchoolAdminError};

// 持久化的令牌对：短效 access + 长效 refresh，对客户端完全不透明
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// 凭证存储抽象
///
/// 浏览器原型放在 Cookie 里；CLI 落到 JSON 文件，测试用内存实现。
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<StoredTokens>>;
    fn store(&self, tokens: &StoredTokens) -> Result<()>;
    fn clear(&self) -> Result<()>;

    /// 刷新流程只换发 access token，refresh token 原样保留
    fn update_access_token(&self, access_token: &str) -> Result<()> {
        match self.load()? {
            Some(mut tokens) => {
                tokens.access_token = access_token.to_string();
                self.store(&tokens)
            }
            None => Err(SchoolAdminError::credential_store(
                "No stored tokens to update",
            )),
        }
    }
}

/// JSON 文件令牌存储
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<StoredTokens>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, tokens: &StoredTokens) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(tokens)?)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// 内存令牌存储
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<StoredTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access_token: &str, refresh_token: &str) -> Self {
        Self {
            inner: RwLock::new(Some(StoredTokens {
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
            })),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<StoredTokens>> {
        Ok(self.inner.read().expect("Token store lock poisoned").clone())
    }

    fn store(&self, tokens: &StoredTokens) -> Result<()> {
        *self.inner.write().expect("Token store lock poisoned") = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.inner.write().expect("Token store lock poisoned") = None;
        Ok(())
    }
}
