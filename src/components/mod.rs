//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `layout` is the shell every routed page renders inside; `toast` renders
//! the notification queue fed by the HTTP error interceptor.

pub mod layout;
pub mod toast;
