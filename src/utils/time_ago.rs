use chrono::{DateTime, Utc};

/// 相对时间展示（"3 minutes ago"）
///
/// 分桶：1 分钟内 "Just now"，1 小时内按分钟，24 小时内按小时，
/// 7 天内按天，再久直接显示日期。
pub fn time_ago(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(from);
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} minute{} ago", plural(minutes))
    } else if hours < 24 {
        format!("{hours} hour{} ago", plural(hours))
    } else if days < 7 {
        format!("{days} day{} ago", plural(days))
    } else {
        from.format("%Y-%m-%d").to_string()
    }
}

fn plural(n: i64) -> &'static str {
    if n > 1 { "s" } else { "" }
}
