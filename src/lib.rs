//! SchoolAdmin - 学校管理后台命令行客户端
//!
//! 面向学校管理 REST API 的类型化客户端与终端看板。
//!
//! # 架构
//! - `cache`: 集合缓存与请求序号
//! - `cli`: 页面层（clap 子命令）
//! - `client`: HTTP 传输、令牌与 API 客户端
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `policy`: 容量策略
//! - `runtime`: 会话上下文
//! - `services`: 资源服务层
//! - `utils`: 工具函数

pub mod cache;
pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod policy;
pub mod runtime;
pub mod services;
pub mod utils;
