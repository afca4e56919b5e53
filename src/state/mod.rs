//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only app-wide mutable state in this client is the toast queue fed by
//! the HTTP error interceptor; page data stays in per-page resources.

pub mod notify;
