//! Analysis page: submit a single-stock analysis job and watch it run.
//!
//! The form collects the symbol, an optional analysis date, the research
//! depth, and the analyst team, then posts through `net::api`. Parameter
//! validation beyond "symbol is present" is the backend's job. After a
//! successful submission the page polls the task-status endpoint until the
//! task reaches a terminal state.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{AnalysisRequest, TaskStatusData};
use crate::util::format::{progress_style, status_class, status_label};

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

/// Delay between task-status polls after a submission.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u64 = 2_000;

/// Build the submission payload, leaving unset options out entirely.
///
/// Returns `None` when the symbol is blank — the only local validation.
pub(crate) fn build_request(
    symbol: &str,
    analysis_date: &str,
    research_depth: &str,
    selected_analysts: &[String],
) -> Option<AnalysisRequest> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return None;
    }
    let analysis_date = {
        let trimmed = analysis_date.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };
    let research_depth = research_depth.trim().parse::<u8>().ok();
    let selected_analysts = (!selected_analysts.is_empty()).then(|| selected_analysts.to_vec());
    Some(AnalysisRequest {
        symbol,
        analysis_date,
        research_depth,
        selected_analysts,
    })
}

/// Toggle an analyst id, preserving the user's selection order.
pub(crate) fn toggle_analyst(selected: &mut Vec<String>, id: &str) {
    if let Some(position) = selected.iter().position(|s| s == id) {
        selected.remove(position);
    } else {
        selected.push(id.to_owned());
    }
}

/// Statuses that end the status-polling loop.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn is_terminal_status(status: &str) -> bool {
    matches!(status, "completed" | "failed")
}

/// Poll the status endpoint for a submitted task until it reaches a
/// terminal state.
///
/// The loop also stops when a newer submission takes over the display, or
/// when a poll fails (the interceptor has already raised a toast).
#[cfg(feature = "hydrate")]
fn spawn_status_poll(
    task_id: String,
    submitted_task: RwSignal<Option<String>>,
    task_status: RwSignal<Option<TaskStatusData>>,
) {
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
            if submitted_task.get_untracked().as_deref() != Some(task_id.as_str()) {
                return;
            }
            match api::fetch_task_status(&task_id).await {
                Ok(envelope) => {
                    if let Some(data) = envelope.data {
                        let done = is_terminal_status(&data.status);
                        task_status.set(Some(data));
                        if done {
                            return;
                        }
                    }
                }
                Err(_) => return,
            }
        }
    });
}

/// Analysis submission page.
#[component]
pub fn AnalysisPage() -> impl IntoView {
    let symbol = RwSignal::new(String::new());
    let analysis_date = RwSignal::new(String::new());
    let research_depth = RwSignal::new("1".to_owned());
    let selected = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let submitted_task = RwSignal::new(None::<String>);
    let task_status = RwSignal::new(None::<TaskStatusData>);

    let roster = LocalResource::new(|| async {
        api::fetch_analysts()
            .await
            .ok()
            .and_then(|envelope| envelope.data)
            .unwrap_or_default()
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(request) = build_request(
            &symbol.get(),
            &analysis_date.get(),
            &research_depth.get(),
            &selected.get(),
        ) else {
            info.set("请输入股票代码".to_owned());
            return;
        };
        busy.set(true);
        info.set("正在提交...".to_owned());
        submitted_task.set(None);
        task_status.set(None);

        #[cfg(not(feature = "hydrate"))]
        let _ = &request;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::submit_analysis(&request).await {
                Ok(envelope) => {
                    if let Some(data) = envelope.data {
                        info.set("分析任务已提交".to_owned());
                        submitted_task.set(Some(data.task_id.clone()));
                        spawn_status_poll(data.task_id, submitted_task, task_status);
                    } else {
                        info.set(envelope.message.unwrap_or_default());
                    }
                }
                Err(_) => {
                    // The interceptor already raised a toast.
                    info.set(String::new());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <section class="analysis-page">
            <header class="analysis-page__header">
                <h1>"股票分析"</h1>
            </header>

            <form class="analysis-form" on:submit=on_submit>
                <label class="analysis-form__field">
                    <span>"股票代码"</span>
                    <input
                        type="text"
                        placeholder="如 NVDA, AAPL"
                        prop:value=move || symbol.get()
                        on:input=move |ev| symbol.set(event_target_value(&ev))
                    />
                </label>

                <label class="analysis-form__field">
                    <span>"分析日期"</span>
                    <input
                        type="date"
                        prop:value=move || analysis_date.get()
                        on:input=move |ev| analysis_date.set(event_target_value(&ev))
                    />
                </label>

                <label class="analysis-form__field">
                    <span>"研究深度"</span>
                    <select
                        prop:value=move || research_depth.get()
                        on:change=move |ev| research_depth.set(event_target_value(&ev))
                    >
                        <option value="1">"快速"</option>
                        <option value="2">"标准"</option>
                        <option value="3">"深度"</option>
                    </select>
                </label>

                <fieldset class="analysis-form__analysts">
                    <legend>"分析师团队"</legend>
                    <Suspense fallback=|| view! { <p class="loading">"加载中..."</p> }>
                        {move || {
                            roster
                                .get()
                                .map(|map| {
                                    map.into_iter()
                                        .map(|(id, analyst)| {
                                            let check_id = id.clone();
                                            let toggle_id = id.clone();
                                            view! {
                                                <label class="analyst-option">
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=move || {
                                                            selected.get().contains(&check_id)
                                                        }
                                                        on:change=move |_| {
                                                            selected
                                                                .update(|list| toggle_analyst(list, &toggle_id));
                                                        }
                                                    />
                                                    <span class="analyst-option__icon">{analyst.icon}</span>
                                                    <span class="analyst-option__name">{analyst.name}</span>
                                                    <span class="analyst-option__desc">
                                                        {analyst.description}
                                                    </span>
                                                </label>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </Suspense>
                </fieldset>

                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "提交分析"
                </button>
            </form>

            <Show when=move || !info.get().is_empty()>
                <p class="analysis-page__info">{move || info.get()}</p>
            </Show>
            <Show when=move || submitted_task.get().is_some()>
                <div class="analysis-page__task">
                    <p>
                        "任务 ID: "
                        <code>{move || submitted_task.get().unwrap_or_default()}</code>
                    </p>
                    {move || {
                        task_status
                            .get()
                            .map(|status| {
                                view! {
                                    <div class="task-progress">
                                        <span class=status_class(&status.status)>
                                            {status_label(&status.status).to_owned()}
                                        </span>
                                        <div class="progress">
                                            <div
                                                class="progress__bar"
                                                style=progress_style(status.progress)
                                            ></div>
                                        </div>
                                        <span class="task-progress__message">
                                            {status.message.clone()}
                                        </span>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Show>
        </section>
    }
}
