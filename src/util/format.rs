//! Display formatting for task status and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human label for a backend task status token.
pub fn status_label(status: &str) -> &str {
    match status {
        "pending" => "等待中",
        "running" => "运行中",
        "completed" => "已完成",
        "failed" => "失败",
        other => other,
    }
}

/// CSS class for a status badge.
pub fn status_class(status: &str) -> &'static str {
    match status {
        "pending" => "badge badge--pending",
        "running" => "badge badge--running",
        "completed" => "badge badge--completed",
        "failed" => "badge badge--failed",
        _ => "badge",
    }
}

/// Trim an ISO-8601 timestamp to a compact `date time` form.
///
/// The backend sends microsecond precision (`2024-06-01T08:00:00.123456`);
/// seconds are plenty for list views. Unrecognized strings pass through.
pub fn format_timestamp(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let time = time.split('.').next().unwrap_or(time);
            format!("{date} {time}")
        }
        None => timestamp.to_owned(),
    }
}

/// Inline width style for a progress bar, clamped to 100%.
pub fn progress_style(progress: u8) -> String {
    format!("width: {}%", progress.min(100))
}
