use super::*;

// =============================================================
// NotifyState queue behavior
// =============================================================

#[test]
fn notify_state_default_is_empty() {
    let state = NotifyState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let first = state.push(ToastLevel::Error, "请求失败");
    let second = state.push(ToastLevel::Info, "任务已删除");
    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "请求失败");
    assert_eq!(state.toasts[1].level, ToastLevel::Info);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotifyState::default();
    let first = state.push(ToastLevel::Error, "a");
    let second = state.push(ToastLevel::Error, "b");
    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_ignores_unknown_ids() {
    let mut state = NotifyState::default();
    state.push(ToastLevel::Error, "a");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let first = state.push(ToastLevel::Error, "a");
    state.dismiss(first);
    let second = state.push(ToastLevel::Error, "b");
    assert_ne!(first, second);
}

#[test]
fn toast_level_defaults_to_error() {
    assert_eq!(ToastLevel::default(), ToastLevel::Error);
}
