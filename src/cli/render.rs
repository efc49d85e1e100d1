use crate::errors::SchoolAdminError;

/// 等宽列对齐的简单表格
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let mut out = String::new();
    render_row(&mut out, headers.iter().map(|h| h.to_string()), &widths);
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, separator.into_iter(), &widths);
    for row in rows {
        render_row(&mut out, row.iter().cloned(), &widths);
    }
    out
}

fn render_row(out: &mut String, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let mut first = true;
    for (cell, width) in cells.zip(widths) {
        if !first {
            out.push_str("  ");
        }
        first = false;
        out.push_str(&format!("{cell:<width$}"));
    }
    // 去掉行尾填充
    while out.ends_with(' ') {
        out.pop();
    }
    out.push('\n');
}

/// 错误的用户侧展示文本
///
/// 容量相关的拒绝（班级满员、教师课时已满）用醒目横幅，
/// 对应原型里更长展示时长的提示；其余错误单行输出。
pub fn format_error_banner(error: &SchoolAdminError) -> String {
    if error.is_capacity_related() {
        format!(
            "\n!!! {}\n!!! This operation was rejected by the capacity policy.\n",
            error.message()
        )
    } else {
        format!("Error: {}", error.format_simple())
    }
}

/// 页面层统一的错误上报：日志 + 终端提示，保留先前状态
pub fn report_error(error: &SchoolAdminError) {
    tracing::error!(code = error.code(), error = %error.message(), "Command failed");
    eprintln!("{}", format_error_banner(error));
}

/// Option 字段的占位展示
pub fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_alignment() {
        let table = render_table(
            &["ID", "Name"],
            &[
                vec!["1".to_string(), "Alice".to_string()],
                vec!["24".to_string(), "B".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  ----");
        assert_eq!(lines[2], "1   Alice");
        assert_eq!(lines[3], "24  B");
    }

    #[test]
    fn test_capacity_errors_get_prominent_banner() {
        let err = SchoolAdminError::validation("Class \"Math - 10-A\" is full");
        let banner = format_error_banner(&err);
        assert!(banner.starts_with("\n!!!"));
        assert!(banner.contains("is full"));
    }

    #[test]
    fn test_generic_errors_stay_single_line() {
        let err = SchoolAdminError::transport("connection refused");
        let banner = format_error_banner(&err);
        assert!(banner.starts_with("Error: "));
        assert!(!banner.contains("!!!"));
    }
}
