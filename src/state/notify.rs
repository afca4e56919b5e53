//! Transient toast notifications raised by the HTTP error interceptor.
//!
//! DESIGN
//! ======
//! The net layer runs outside component scope, so `App` installs its notify
//! signal into a thread-local sink at mount. WASM is single-threaded and the
//! sink is written exactly once, then only read, so the process-wide handle
//! stays race-free.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a toast stays on screen before auto-dismissal.
#[cfg(feature = "hydrate")]
const TOAST_LIFETIME_MS: u64 = 5_000;

/// Severity of a toast message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Error,
    Info,
}

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic id, unique within the session.
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl NotifyState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(feature = "hydrate")]
thread_local! {
    static SINK: std::cell::RefCell<Option<leptos::prelude::RwSignal<NotifyState>>> =
        const { std::cell::RefCell::new(None) };
}

/// Install the app-wide notify signal as the interceptor's sink.
///
/// Called once from `App`. No-op on the server.
pub fn install(signal: leptos::prelude::RwSignal<NotifyState>) {
    #[cfg(feature = "hydrate")]
    SINK.with(|sink| *sink.borrow_mut() = Some(signal));
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signal;
    }
}

/// Show a non-blocking error toast that auto-dismisses.
///
/// No-op before `install` runs or on the server.
pub fn error(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::Update;

        let Some(signal) = SINK.with(|sink| *sink.borrow()) else {
            return;
        };
        let mut id = 0;
        signal.update(|state| id = state.push(ToastLevel::Error, message));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_LIFETIME_MS)).await;
            signal.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
