use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::RequestSequence;
use crate::cli::render;
use crate::errors::Result;
use crate::models::dashboard::DashboardData;
use crate::runtime::AppContext;

/// 首页文本渲染（纯函数，便于测试）
pub fn render_dashboard(data: &DashboardData) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Students: {}  Classes: {}  Teachers: {}  Enrollment: {:.1}%\n\n",
        data.stats.total_students,
        data.stats.active_classes,
        data.stats.total_teachers,
        data.stats.enrollment_rate
    ));

    if data.activities.is_empty() {
        out.push_str("No recent activity\n");
        return out;
    }
    let rows: Vec<Vec<String>> = data
        .activities
        .iter()
        .map(|a| {
            vec![
                a.time.clone(),
                a.action.clone(),
                a.details.clone(),
            ]
        })
        .collect();
    out.push_str(&render::render_table(&["When", "Event", "Details"], &rows));
    out
}

/// 首页：一次性渲染，或按配置的间隔周期刷新
///
/// watch 模式下每轮刷新领取一个请求序号，
/// 响应回来时序号已被更新轮次取代的直接丢弃，
/// 保证慢响应不会用过期数据覆盖屏幕。
pub async fn handle(context: Arc<AppContext>, watch: bool) -> Result<()> {
    let data = context.dashboard.dashboard_data().await;
    print!("{}", render_dashboard(&data));
    if !watch {
        return Ok(());
    }

    let sequence = Arc::new(RequestSequence::new());
    let mut interval = tokio::time::interval(Duration::from_secs(
        context.config.cache.refresh_interval_secs,
    ));
    // 首屏已渲染，跳过 interval 的立即到期
    interval.tick().await;

    loop {
        interval.tick().await;
        let token = sequence.begin();
        let context = context.clone();
        let sequence = sequence.clone();
        tokio::spawn(async move {
            let data = context.dashboard.dashboard_data().await;
            if sequence.is_current(token) {
                print!("{}", render_dashboard(&data));
            } else {
                debug!(token, "Discarding stale dashboard refresh");
            }
        });
    }
}
