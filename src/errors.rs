//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_schooladmin_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_schooladmin_errors! {
    Transport("E001", "Transport Error"),
    Timeout("E002", "Request Timeout"),
    Authentication("E003", "Authentication Error"),
    Authorization("E004", "Authorization Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Api("E007", "API Error"),
    Serialization("E008", "Serialization Error"),
    Configuration("E009", "Configuration Error"),
    CredentialStore("E010", "Credential Store Error"),
}

impl SchoolAdminError {
    /// 判断是否为容量相关的业务错误（班级满员 / 教师课时已达上限）
    ///
    /// 后端的拒绝消息中包含 "is full" 或 "max sections"，
    /// UI 层据此选择更醒目、更持久的提示方式。
    pub fn is_capacity_related(&self) -> bool {
        matches!(self, SchoolAdminError::Validation(_))
            && (self.message().contains("is full") || self.message().contains("max sections"))
    }

    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<reqwest::Error> for SchoolAdminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SchoolAdminError::Timeout(err.to_string())
        } else {
            SchoolAdminError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SchoolAdminError {
    fn from(err: serde_json::Error) -> Self {
        SchoolAdminError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for SchoolAdminError {
    fn from(err: std::io::Error) -> Self {
        SchoolAdminError::CredentialStore(err.to_string())
    }
}

impl From<config::ConfigError> for SchoolAdminError {
    fn from(err: config::ConfigError) -> Self {
        SchoolAdminError::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;
