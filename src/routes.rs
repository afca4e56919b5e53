//! Declarative route table and the navigation title guard.
//!
//! DESIGN
//! ======
//! Routes live in one fixed table consulted by the router wiring in `app`,
//! the sidebar navigation, and the title guard. Unmatched paths resolve to
//! the dashboard entry, mirroring the catch-all redirect, so a bad URL never
//! reaches a dead-end state.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Application name used as the title suffix and as the fallback title.
pub const APP_NAME: &str = "TradingAgents";

/// Path the bare root and every unmatched URL redirect to.
pub const DEFAULT_PATH: &str = "/dashboard";

/// A single entry in the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    /// Absolute path matched against the browser location.
    pub path: &'static str,
    /// Stable route name.
    pub name: &'static str,
    /// Display title consumed by the title guard; `None` leaves the
    /// application name alone.
    pub title: Option<&'static str>,
}

/// Fixed route table, nested under the shell layout.
///
/// The default route must stay first; `default_route` relies on it.
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        path: "/dashboard",
        name: "Dashboard",
        title: Some("仪表板"),
    },
    RouteDef {
        path: "/analysis",
        name: "Analysis",
        title: Some("股票分析"),
    },
    RouteDef {
        path: "/tasks",
        name: "Tasks",
        title: Some("任务列表"),
    },
    RouteDef {
        path: "/about",
        name: "About",
        title: Some("关于"),
    },
];

/// The route every unmatched path falls back to.
pub fn default_route() -> &'static RouteDef {
    &ROUTES[0]
}

/// Resolve a browser path to its route definition.
///
/// Trailing slashes are ignored; unknown paths (and the bare root) resolve
/// to the default route.
pub fn resolve(path: &str) -> &'static RouteDef {
    let trimmed = path.trim_end_matches('/');
    ROUTES
        .iter()
        .find(|route| route.path == trimmed)
        .unwrap_or_else(default_route)
}

/// Format the document title for a route.
pub fn document_title(route: &RouteDef) -> String {
    match route.title {
        Some(title) => format!("{title} - {APP_NAME}"),
        None => APP_NAME.to_owned(),
    }
}

/// Title guard: set `document.title` for the route matching `path`.
///
/// Runs on every navigation and only synchronizes metadata; it never blocks
/// or redirects. No-op on the server.
pub fn apply_document_title(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        let title = document_title(resolve(path));
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(&title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
