use super::*;

// =============================================================
// build_request
// =============================================================

#[test]
fn blank_symbol_yields_no_request() {
    assert_eq!(build_request("", "", "", &[]), None);
    assert_eq!(build_request("   ", "2024-06-01", "2", &[]), None);
}

#[test]
fn symbol_is_trimmed_and_uppercased() {
    let request = build_request("  aapl ", "", "", &[]).unwrap();
    assert_eq!(request.symbol, "AAPL");
}

#[test]
fn bare_symbol_request_has_no_optional_fields() {
    let request = build_request("AAPL", "", "", &[]).unwrap();
    assert_eq!(request.analysis_date, None);
    assert_eq!(request.research_depth, None);
    assert_eq!(request.selected_analysts, None);
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json, serde_json::json!({ "symbol": "AAPL" }));
}

#[test]
fn set_options_are_carried_through() {
    let analysts = vec!["market".to_owned(), "fundamentals".to_owned()];
    let request = build_request("nvda", "2024-06-01", "3", &analysts).unwrap();
    assert_eq!(request.analysis_date.as_deref(), Some("2024-06-01"));
    assert_eq!(request.research_depth, Some(3));
    assert_eq!(request.selected_analysts.as_deref(), Some(&analysts[..]));
}

#[test]
fn unparseable_depth_is_dropped() {
    let request = build_request("AAPL", "", "deep", &[]).unwrap();
    assert_eq!(request.research_depth, None);
}

// =============================================================
// toggle_analyst
// =============================================================

#[test]
fn toggle_adds_then_removes() {
    let mut selected = Vec::new();
    toggle_analyst(&mut selected, "market");
    assert_eq!(selected, ["market"]);
    toggle_analyst(&mut selected, "market");
    assert!(selected.is_empty());
}

// =============================================================
// is_terminal_status
// =============================================================

#[test]
fn completed_and_failed_end_polling() {
    assert!(is_terminal_status("completed"));
    assert!(is_terminal_status("failed"));
}

#[test]
fn in_flight_statuses_keep_polling() {
    assert!(!is_terminal_status("pending"));
    assert!(!is_terminal_status("running"));
    assert!(!is_terminal_status(""));
    assert!(!is_terminal_status("archived"));
}

#[test]
fn toggle_preserves_selection_order() {
    let mut selected = Vec::new();
    toggle_analyst(&mut selected, "news");
    toggle_analyst(&mut selected, "market");
    toggle_analyst(&mut selected, "social");
    toggle_analyst(&mut selected, "market");
    assert_eq!(selected, ["news", "social"]);
}
