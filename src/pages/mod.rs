//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (resources, form state) and
//! talks to the backend only through `net::api`.

pub mod about;
pub mod analysis;
pub mod dashboard;
pub mod tasks;
