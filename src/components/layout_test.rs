use super::*;

// =============================================================
// is_active
// =============================================================

#[test]
fn active_for_the_matching_path() {
    assert!(is_active("/tasks", "/tasks"));
    assert!(!is_active("/tasks", "/analysis"));
}

#[test]
fn active_ignores_trailing_slash_in_location() {
    assert!(is_active("/about", "/about/"));
}

#[test]
fn dashboard_is_active_for_unknown_locations() {
    assert!(is_active("/dashboard", "/no-such-page"));
    assert!(is_active("/dashboard", "/"));
    assert!(!is_active("/tasks", "/no-such-page"));
}

// =============================================================
// nav_link_class
// =============================================================

#[test]
fn nav_link_class_adds_active_modifier() {
    assert_eq!(nav_link_class(true), "nav-link nav-link--active");
    assert_eq!(nav_link_class(false), "nav-link");
}
