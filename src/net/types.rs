//! Wire-schema DTOs for the TradingAgents HTTP API.
//!
//! DESIGN
//! ======
//! The backend wraps most payloads in a `{success, data, message}` envelope;
//! the DTOs mirror that shape so serde does the unwrapping and page code
//! stays typed. Open-ended payloads (analysis results, system info) stay as
//! `serde_json::Value`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Generic `{success, data?, message?}` response envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Whether the backend considers the call successful.
    pub success: bool,
    /// Operation payload; absent on bare acknowledgements.
    #[serde(default)]
    pub data: Option<T>,
    /// Optional human-readable note (e.g. "任务已删除").
    #[serde(default)]
    pub message: Option<String>,
}

/// Submission payload for `POST /analysis/single`.
///
/// Unset options stay out of the serialized body entirely; the backend
/// applies its own defaults and validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
    /// Stock symbol, e.g. `NVDA` or `AAPL`.
    pub symbol: String,
    /// Analysis date in `YYYY-MM-DD` form; server defaults to today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_date: Option<String>,
    /// Research depth 1–3 (quick / standard / deep).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_depth: Option<u8>,
    /// Analyst team in the user's selection order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_analysts: Option<Vec<String>>,
}

impl AnalysisRequest {
    /// A request carrying only the required symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            analysis_date: None,
            research_depth: None,
            selected_analysts: None,
        }
    }
}

/// `data` payload of a successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmitData {
    /// Server-assigned task identifier (opaque UUID string).
    pub task_id: String,
    /// Initial task status, normally `pending`.
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// `data` payload of `GET /analysis/tasks/{id}/status`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct TaskStatusData {
    pub task_id: String,
    /// One of `pending`, `running`, `completed`, `failed`.
    pub status: String,
    /// Percent complete, 0–100.
    pub progress: u8,
    /// Progress note from the analysis pipeline.
    pub message: String,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
    /// ISO-8601 last-update timestamp.
    pub updated_at: String,
}

/// A task record as returned by the list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaskSummary {
    pub task_id: String,
    pub status: String,
    pub progress: u8,
    pub message: String,
    /// Final analysis result, present once the task completes.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    pub created_at: String,
    pub updated_at: String,
}

/// `data` payload of `GET /analysis/tasks` (newest first).
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TaskListData {
    #[serde(default)]
    pub tasks: Vec<TaskSummary>,
    pub total: u32,
}

/// One entry in the analyst roster.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnalystInfo {
    /// Display name, e.g. "市场分析师".
    pub name: String,
    /// Emoji icon shown next to the name.
    pub icon: String,
    pub description: String,
}

/// Roster map keyed by analyst id (`market`, `news`, ...).
///
/// A `BTreeMap` keeps iteration order stable for rendering; the user's
/// selection order is tracked separately by the analysis form.
pub type AnalystRoster = BTreeMap<String, AnalystInfo>;

/// `GET /health` payload (flat, no envelope).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthCheck {
    pub success: bool,
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// `data` payload of `GET /health/status`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HealthStatusData {
    pub status: String,
    pub timestamp: String,
    /// Host platform details; shape varies by deployment.
    #[serde(default)]
    pub system: Option<serde_json::Value>,
    /// Per-service availability, e.g. `{"api": "running"}`.
    #[serde(default)]
    pub services: BTreeMap<String, String>,
}

/// `GET /health/ping` payload (flat, no envelope).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Ping {
    pub pong: bool,
    pub timestamp: String,
}

/// Error body produced by the backend on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
