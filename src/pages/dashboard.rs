//! Dashboard page: service health summary and a recent-task overview.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::TaskSummary;
use crate::util::format::{format_timestamp, status_class, status_label};

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// How many tasks the overview shows.
const RECENT_LIMIT: usize = 5;

/// Per-status counters for the summary cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct StatusCounts {
    pub pending: usize,
    pub running: usize,
    pub completed: usize,
    pub failed: usize,
}

pub(crate) fn count_statuses(tasks: &[TaskSummary]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status.as_str() {
            "pending" => counts.pending += 1,
            "running" => counts.running += 1,
            "completed" => counts.completed += 1,
            "failed" => counts.failed += 1,
            _ => {}
        }
    }
    counts
}

/// The server returns newest first; keep the head for the overview.
pub(crate) fn recent_tasks(mut tasks: Vec<TaskSummary>, limit: usize) -> Vec<TaskSummary> {
    tasks.truncate(limit);
    tasks
}

/// Dashboard page — health card plus the latest analysis tasks.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let health = LocalResource::new(|| async { api::health_status().await.ok() });
    let tasks = LocalResource::new(|| async {
        api::fetch_tasks(None)
            .await
            .ok()
            .and_then(|envelope| envelope.data)
            .map(|data| data.tasks)
            .unwrap_or_default()
    });

    view! {
        <section class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"仪表板"</h1>
            </header>

            <Suspense fallback=|| view! { <p class="loading">"加载中..."</p> }>
                <div class="dashboard-page__health">
                    {move || {
                        health
                            .get()
                            .map(|envelope| {
                                let status = envelope
                                    .and_then(|e| e.data)
                                    .map_or_else(|| "不可用".to_owned(), |data| data.status);
                                let healthy = status == "healthy";
                                view! {
                                    <div class=if healthy {
                                        "health-card health-card--ok"
                                    } else {
                                        "health-card health-card--down"
                                    }>
                                        <span class="health-card__label">"服务状态"</span>
                                        <span class="health-card__value">{status}</span>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Suspense>

            <Suspense fallback=|| view! { <p class="loading">"加载中..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|list| {
                            let counts = count_statuses(&list);
                            let recent = recent_tasks(list, RECENT_LIMIT);
                            view! {
                                <div class="dashboard-page__counts">
                                    <div class="count-card">
                                        <span>"等待中"</span>
                                        <strong>{counts.pending}</strong>
                                    </div>
                                    <div class="count-card">
                                        <span>"运行中"</span>
                                        <strong>{counts.running}</strong>
                                    </div>
                                    <div class="count-card">
                                        <span>"已完成"</span>
                                        <strong>{counts.completed}</strong>
                                    </div>
                                    <div class="count-card">
                                        <span>"失败"</span>
                                        <strong>{counts.failed}</strong>
                                    </div>
                                </div>
                                <h2>"最近任务"</h2>
                                <ul class="dashboard-page__recent">
                                    {recent
                                        .into_iter()
                                        .map(|task| {
                                            view! {
                                                <li class="recent-task">
                                                    <span class=status_class(&task.status)>
                                                        {status_label(&task.status).to_owned()}
                                                    </span>
                                                    <span class="recent-task__id">{task.task_id.clone()}</span>
                                                    <span class="recent-task__time">
                                                        {format_timestamp(&task.created_at)}
                                                    </span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}
