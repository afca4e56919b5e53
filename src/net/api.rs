//! REST API surface for the TradingAgents backend.
//!
//! One thin async function per backend operation. All of them share the
//! plumbing in `client`: `/api` base path, 60-second deadline, JSON
//! content type, and the notify-then-propagate failure path.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::client;
use super::types::{
    AnalysisRequest, AnalystRoster, Envelope, HealthCheck, HealthStatusData, Ping, SubmitData,
    TaskListData, TaskStatusData,
};

fn task_status_endpoint(task_id: &str) -> String {
    format!("/analysis/tasks/{task_id}/status")
}

fn task_result_endpoint(task_id: &str) -> String {
    format!("/analysis/tasks/{task_id}/result")
}

fn task_endpoint(task_id: &str) -> String {
    format!("/analysis/tasks/{task_id}")
}

fn tasks_endpoint(status: Option<&str>) -> String {
    match status {
        Some(status) if !status.is_empty() => format!("/analysis/tasks?status={status}"),
        _ => "/analysis/tasks".to_owned(),
    }
}

/// `GET /health` — basic liveness probe.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn health_check() -> Result<HealthCheck, String> {
    client::get_json("/health").await
}

/// `GET /health/status` — detailed service status.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn health_status() -> Result<Envelope<HealthStatusData>, String> {
    client::get_json("/health/status").await
}

/// `GET /health/ping`.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn health_ping() -> Result<Ping, String> {
    client::get_json("/health/ping").await
}

/// `POST /analysis/single` — submit a single-stock analysis job.
///
/// The server-assigned task id arrives in the envelope `data`.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn submit_analysis(request: &AnalysisRequest) -> Result<Envelope<SubmitData>, String> {
    client::post_json("/analysis/single", request).await
}

/// `GET /analysis/tasks/{id}/status`.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn fetch_task_status(task_id: &str) -> Result<Envelope<TaskStatusData>, String> {
    client::get_json(&task_status_endpoint(task_id)).await
}

/// `GET /analysis/tasks/{id}/result` — result payload of a completed task.
///
/// For unfinished tasks the backend answers `success: false` with progress
/// details in `data`.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn fetch_task_result(task_id: &str) -> Result<Envelope<serde_json::Value>, String> {
    client::get_json(&task_result_endpoint(task_id)).await
}

/// `GET /analysis/tasks` with an optional status filter.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn fetch_tasks(status: Option<&str>) -> Result<Envelope<TaskListData>, String> {
    client::get_json(&tasks_endpoint(status)).await
}

/// `DELETE /analysis/tasks/{id}`.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn delete_task(task_id: &str) -> Result<Envelope<serde_json::Value>, String> {
    client::delete_json(&task_endpoint(task_id)).await
}

/// `GET /analysis/analysts` — the available analyst roster.
///
/// # Errors
///
/// Returns the normalized failure message; a toast has already been shown.
pub async fn fetch_analysts() -> Result<Envelope<AnalystRoster>, String> {
    client::get_json("/analysis/analysts").await
}
