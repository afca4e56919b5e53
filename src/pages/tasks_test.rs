use super::*;

// =============================================================
// filter_param
// =============================================================

#[test]
fn empty_filter_means_no_query_parameter() {
    assert_eq!(filter_param(""), None);
}

#[test]
fn non_empty_filter_passes_through() {
    assert_eq!(filter_param("completed"), Some("completed"));
    assert_eq!(filter_param("done"), Some("done"));
}

// =============================================================
// STATUS_FILTERS
// =============================================================

#[test]
fn filter_list_starts_with_all() {
    assert_eq!(STATUS_FILTERS[0], ("", "全部"));
}

#[test]
fn filter_values_are_backend_status_tokens() {
    let values: Vec<&str> = STATUS_FILTERS.iter().skip(1).map(|(value, _)| *value).collect();
    assert_eq!(values, ["pending", "running", "completed", "failed"]);
}

#[test]
fn filter_values_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for (value, _) in STATUS_FILTERS {
        assert!(seen.insert(*value), "duplicate filter value {value}");
    }
}
