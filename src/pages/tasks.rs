//! Tasks page: list, filter, inspect, and delete analysis tasks.

use leptos::prelude::*;

use crate::net::api;
use crate::util::format::{format_timestamp, progress_style, status_class, status_label};

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

/// Filter options shown in the status dropdown; empty value means "all".
pub(crate) const STATUS_FILTERS: &[(&str, &str)] = &[
    ("", "全部"),
    ("pending", "等待中"),
    ("running", "运行中"),
    ("completed", "已完成"),
    ("failed", "失败"),
];

/// Translate the dropdown value into the optional query parameter.
pub(crate) fn filter_param(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Task list page with status filtering and on-demand result display.
#[component]
pub fn TasksPage() -> impl IntoView {
    let filter = RwSignal::new(String::new());
    let expanded = RwSignal::new(None::<(String, serde_json::Value)>);

    // Re-fetches whenever the filter changes.
    let tasks = LocalResource::new(move || {
        let status = filter.get();
        async move {
            api::fetch_tasks(filter_param(&status))
                .await
                .ok()
                .and_then(|envelope| envelope.data)
                .map(|data| data.tasks)
                .unwrap_or_default()
        }
    });

    let on_refresh = move |_| tasks.refetch();

    let delete = move |task_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if api::delete_task(&task_id).await.is_ok() {
                tasks.refetch();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = task_id;
    };

    let view_result = move |task_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Ok(envelope) = api::fetch_task_result(&task_id).await {
                if let Some(result) = envelope.data {
                    expanded.set(Some((task_id, result)));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = task_id;
    };

    view! {
        <section class="tasks-page">
            <header class="tasks-page__header">
                <h1>"任务列表"</h1>
                <div class="tasks-page__controls">
                    <select
                        prop:value=move || filter.get()
                        on:change=move |ev| filter.set(event_target_value(&ev))
                    >
                        {STATUS_FILTERS
                            .iter()
                            .map(|(value, label)| {
                                view! { <option value=*value>{*label}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn" on:click=on_refresh>
                        "刷新"
                    </button>
                </div>
            </header>

            <Suspense fallback=|| view! { <p class="loading">"加载中..."</p> }>
                {move || {
                    tasks
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! { <p class="tasks-page__empty">"暂无任务"</p> }.into_any()
                            } else {
                                view! {
                                    <table class="task-table">
                                        <thead>
                                            <tr>
                                                <th>"状态"</th>
                                                <th>"任务 ID"</th>
                                                <th>"进度"</th>
                                                <th>"创建时间"</th>
                                                <th>"操作"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {list
                                                .into_iter()
                                                .map(|task| {
                                                    let completed = task.status == "completed";
                                                    let result_id = task.task_id.clone();
                                                    let delete_id = task.task_id.clone();
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                <span class=status_class(&task.status)>
                                                                    {status_label(&task.status).to_owned()}
                                                                </span>
                                                            </td>
                                                            <td>
                                                                <code>{task.task_id.clone()}</code>
                                                            </td>
                                                            <td>
                                                                <div class="progress">
                                                                    <div
                                                                        class="progress__bar"
                                                                        style=progress_style(task.progress)
                                                                    ></div>
                                                                </div>
                                                            </td>
                                                            <td>{format_timestamp(&task.created_at)}</td>
                                                            <td>
                                                                <Show when=move || completed>
                                                                    <button
                                                                        class="btn btn--link"
                                                                        on:click={
                                                                            let result_id = result_id.clone();
                                                                            move |_| view_result(result_id.clone())
                                                                        }
                                                                    >
                                                                        "查看结果"
                                                                    </button>
                                                                </Show>
                                                                <button
                                                                    class="btn btn--danger"
                                                                    on:click=move |_| delete(delete_id.clone())
                                                                >
                                                                    "删除"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || expanded.get().is_some()>
                {move || {
                    expanded
                        .get()
                        .map(|(task_id, result)| {
                            view! {
                                <div class="task-result">
                                    <header class="task-result__header">
                                        <h2>"分析结果 " <code>{task_id}</code></h2>
                                        <button
                                            class="btn"
                                            on:click=move |_| expanded.set(None)
                                        >
                                            "关闭"
                                        </button>
                                    </header>
                                    <pre class="task-result__body">
                                        {serde_json::to_string_pretty(&result).unwrap_or_default()}
                                    </pre>
                                </div>
                            }
                        })
                }}
            </Show>
        </section>
    }
}
