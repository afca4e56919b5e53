use super::*;

// =============================================================
// status_label / status_class
// =============================================================

#[test]
fn known_statuses_get_chinese_labels() {
    assert_eq!(status_label("pending"), "等待中");
    assert_eq!(status_label("running"), "运行中");
    assert_eq!(status_label("completed"), "已完成");
    assert_eq!(status_label("failed"), "失败");
}

#[test]
fn unknown_status_passes_through() {
    assert_eq!(status_label("archived"), "archived");
    assert_eq!(status_class("archived"), "badge");
}

#[test]
fn status_class_matches_status_token() {
    assert_eq!(status_class("running"), "badge badge--running");
    assert_eq!(status_class("failed"), "badge badge--failed");
}

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn timestamp_drops_subsecond_precision() {
    assert_eq!(
        format_timestamp("2024-06-01T08:00:00.123456"),
        "2024-06-01 08:00:00"
    );
}

#[test]
fn timestamp_without_fraction_is_kept() {
    assert_eq!(format_timestamp("2024-06-01T08:00:00"), "2024-06-01 08:00:00");
}

#[test]
fn non_iso_string_passes_through() {
    assert_eq!(format_timestamp("just now"), "just now");
}

// =============================================================
// progress_style
// =============================================================

#[test]
fn progress_style_formats_percent() {
    assert_eq!(progress_style(42), "width: 42%");
}

#[test]
fn progress_style_clamps_to_100() {
    assert_eq!(progress_style(250), "width: 100%");
}
