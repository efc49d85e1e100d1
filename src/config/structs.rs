use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub credentials: CredentialsConfig,
}

/// 应用设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub system_name: String,
    pub environment: String,
    pub log_level: String,
}

/// 后端 API 配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String, // REST 后端地址
    pub timeouts: TimeoutConfig,
    pub fetch_limit: i64, // 整表抓取时的单页上限（后端最大允许 100）
    pub page_size: i64,   // 列表页的本地分页大小
}

/// 超时配置（秒）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub login: u64,
    pub register: u64,
    pub profile: u64,
    pub request: u64, // 普通请求的传输层超时
}

/// 缓存配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    pub collection_ttl_ms: i64, // 集合缓存有效期（毫秒）
    pub refresh_interval_secs: u64, // watch 模式的刷新周期
}

/// 凭证存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub file: String, // 令牌文件路径，空字符串表示使用默认位置
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app: AppSettings {
                system_name: "SchoolAdmin".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            api: ApiConfig {
                base_url: "http://localhost:3000".to_string(),
                timeouts: TimeoutConfig {
                    login: 10,
                    register: 10,
                    profile: 5,
                    request: 30,
                },
                fetch_limit: 100,
                page_size: 10,
            },
            cache: CacheConfig {
                collection_ttl_ms: 30_000,
                refresh_interval_secs: 30,
            },
            credentials: CredentialsConfig {
                file: String::new(),
            },
        }
    }
}
