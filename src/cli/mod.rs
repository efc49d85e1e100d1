//! 页面层：clap 子命令编排服务调用、缓存与容量预检
//!
//! 只负责取数、预检和表格输出，所有业务约束以服务端为准。

pub mod admin;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod enrollment;
pub mod render;
pub mod students;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::errors::Result;
use crate::runtime::AppContext;

#[derive(Debug, Parser)]
#[command(
    name = "rust-schooladmin",
    version,
    about = "School administration dashboard"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// 登录并保存令牌
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// 注册新用户
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// admin / teacher / student
        #[arg(long)]
        role: String,
    },
    /// 登出并清除本地令牌
    Logout,
    /// 当前登录用户
    Whoami,
    /// 学生管理
    #[command(subcommand)]
    Students(students::StudentsCommand),
    /// 班级管理
    #[command(subcommand)]
    Classes(classes::ClassesCommand),
    /// 学生入班（先本地容量预检）
    Enroll {
        student_id: i64,
        class_id: i64,
    },
    /// 管理端视图
    #[command(subcommand)]
    Admin(admin::AdminCommand),
    /// 首页统计与动态
    Dashboard {
        /// 周期性刷新
        #[arg(long)]
        watch: bool,
    },
}

/// 命令分发
pub async fn dispatch(context: Arc<AppContext>, command: Commands) -> Result<()> {
    match command {
        Commands::Login { email, password } => auth::login(&context, &email, &password).await,
        Commands::Register {
            name,
            email,
            password,
            role,
        } => auth::register(&context, &name, &email, &password, &role).await,
        Commands::Logout => auth::logout(&context).await,
        Commands::Whoami => auth::whoami(&context).await,
        Commands::Students(command) => students::dispatch(&context, command).await,
        Commands::Classes(command) => classes::dispatch(&context, command).await,
        Commands::Enroll {
            student_id,
            class_id,
        } => enrollment::enroll(&context, student_id, class_id).await,
        Commands::Admin(command) => admin::dispatch(&context, command).await,
        Commands::Dashboard { watch } => dashboard::handle(context, watch).await,
    }
}
