//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::MainLayout;
use crate::pages::{
    about::AboutPage, analysis::AnalysisPage, dashboard::DashboardPage, tasks::TasksPage,
};
use crate::state::notify::{self, NotifyState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="zh-CN">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notification context, installs it as the sink for the HTTP
/// error interceptor, and sets up client-side routing. Route views are
/// deferred closures, so page code is constructed on first navigation
/// rather than eagerly at startup.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(NotifyState::default());
    provide_context(toasts);
    notify::install(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/tradingagents-web.css"/>
        <Title text="TradingAgents"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("analysis") view=AnalysisPage/>
                    <Route path=StaticSegment("tasks") view=TasksPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path="/dashboard"/> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
