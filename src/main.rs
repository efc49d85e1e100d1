use std::sync::Arc;

use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use tracing::debug;

use rust_schooladmin::cli::{self, Cli};
use rust_schooladmin::config::AppConfig;
use rust_schooladmin::runtime::AppContext;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 启动前预处理 //

    // 初始化配置
    setup_panic!();
    AppConfig::init().expect("Failed to initialize configuration");
    let config = AppConfig::get();

    // 初始化日志
    let stdout_log = std::io::stdout();
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(stdout_log);
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "Starting {} v{} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    // 预处理完成 //

    let cli = Cli::parse();

    let context = match AppContext::new(config.clone()) {
        Ok(context) => Arc::new(context),
        Err(e) => {
            cli::render::report_error(&e);
            std::process::exit(1);
        }
    };

    if let Err(e) = cli::dispatch(context, cli.command).await {
        cli::render::report_error(&e);
        std::process::exit(1);
    }
}
