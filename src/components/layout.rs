//! Shell layout: sidebar navigation, routed page outlet, toast overlay.
//!
//! Also hosts the title guard — an effect inside the router scope that
//! synchronizes `document.title` with the active route's metadata on every
//! navigation.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::components::toast::ToastStack;
use crate::routes::{self, ROUTES};

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// True when the nav link for `route_path` should render as active.
///
/// Unmatched locations resolve to the dashboard, so its link lights up even
/// mid-redirect.
pub(crate) fn is_active(route_path: &str, current: &str) -> bool {
    routes::resolve(current).path == route_path
}

pub(crate) fn nav_link_class(active: bool) -> &'static str {
    if active {
        "nav-link nav-link--active"
    } else {
        "nav-link"
    }
}

/// Shell layout wrapping every routed page.
#[component]
pub fn MainLayout() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;

    // Title guard: runs before paint on each navigation, never blocks it.
    Effect::new(move || {
        routes::apply_document_title(&pathname.get());
    });

    view! {
        <div class="app-shell">
            <aside class="app-shell__sidebar">
                <div class="app-shell__brand">"TradingAgents"</div>
                <nav class="app-shell__nav">
                    {ROUTES
                        .iter()
                        .map(|route| {
                            let path = route.path;
                            let label = route.title.unwrap_or(route.name);
                            view! {
                                <div class=move || {
                                    nav_link_class(is_active(path, &pathname.get()))
                                }>
                                    <A href=path>{label}</A>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <main class="app-shell__content">
                <Outlet/>
            </main>
            <ToastStack/>
        </div>
    }
}
