//! HTTP access layer for the TradingAgents API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns the shared request plumbing (base path, timeout, error
//! normalization), `api` exposes one function per backend operation, and
//! `types` defines the wire schema.

pub mod api;
pub mod client;
pub mod types;
