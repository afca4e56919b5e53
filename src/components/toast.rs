//! Toast overlay rendering the transient notification queue.

use leptos::prelude::*;

use crate::state::notify::{NotifyState, ToastLevel};

fn toast_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Error => "toast toast--error",
        ToastLevel::Info => "toast toast--info",
    }
}

/// Fixed overlay listing active toasts, newest at the bottom.
#[component]
pub fn ToastStack() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    view! {
        <div class="toast-stack">
            <For
                each=move || notify.get().toasts
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast_class(toast.level)>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__close"
                                on:click=move |_| notify.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
