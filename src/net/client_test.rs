use super::*;

// =============================================================
// Configuration constants
// =============================================================

#[test]
fn base_path_and_timeout_match_backend_contract() {
    assert_eq!(API_BASE, "/api");
    assert_eq!(TIMEOUT_MS, 60_000);
}

#[test]
fn endpoint_joins_base_path() {
    assert_eq!(endpoint("/health"), "/api/health");
    assert_eq!(endpoint("/analysis/single"), "/api/analysis/single");
}

// =============================================================
// normalize_error_message priority
// =============================================================

#[test]
fn server_detail_wins_over_transport_message() {
    let message = normalize_error_message(Some("任务不存在"), Some("Network Error"));
    assert_eq!(message, "任务不存在");
}

#[test]
fn transport_message_used_when_detail_absent() {
    let message = normalize_error_message(None, Some("Network Error"));
    assert_eq!(message, "Network Error");
}

#[test]
fn fallback_literal_used_when_nothing_else_is_available() {
    assert_eq!(normalize_error_message(None, None), "请求失败");
    assert_eq!(FALLBACK_MESSAGE, "请求失败");
}

#[test]
fn empty_messages_fall_through() {
    assert_eq!(normalize_error_message(Some(""), Some("Network Error")), "Network Error");
    assert_eq!(normalize_error_message(Some(""), Some("")), "请求失败");
}

#[test]
fn timeout_message_is_a_transport_message() {
    assert_eq!(normalize_error_message(None, Some(TIMEOUT_MESSAGE)), "请求超时");
}
