use super::*;

fn task(id: &str, status: &str) -> TaskSummary {
    TaskSummary {
        task_id: id.to_owned(),
        status: status.to_owned(),
        progress: 0,
        message: String::new(),
        result: None,
        created_at: "2024-06-01T08:00:00".to_owned(),
        updated_at: "2024-06-01T08:00:00".to_owned(),
    }
}

// =============================================================
// count_statuses
// =============================================================

#[test]
fn counts_each_known_status() {
    let tasks = vec![
        task("a", "pending"),
        task("b", "running"),
        task("c", "running"),
        task("d", "completed"),
        task("e", "failed"),
    ];
    let counts = count_statuses(&tasks);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.running, 2);
    assert_eq!(counts.completed, 1);
    assert_eq!(counts.failed, 1);
}

#[test]
fn unknown_statuses_are_not_counted() {
    let counts = count_statuses(&[task("a", "archived")]);
    assert_eq!(counts, StatusCounts::default());
}

#[test]
fn empty_list_counts_zero() {
    assert_eq!(count_statuses(&[]), StatusCounts::default());
}

// =============================================================
// recent_tasks
// =============================================================

#[test]
fn recent_tasks_keeps_the_head_in_order() {
    let tasks = vec![task("new", "completed"), task("mid", "running"), task("old", "pending")];
    let recent = recent_tasks(tasks, 2);
    let ids: Vec<&str> = recent.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, ["new", "mid"]);
}

#[test]
fn recent_tasks_with_short_list_returns_all() {
    let recent = recent_tasks(vec![task("only", "pending")], 5);
    assert_eq!(recent.len(), 1);
}
