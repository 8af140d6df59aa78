//! REST API server for the outbreak impact estimator
//!
//! Exposes the `impact_core` estimator over HTTP: JSON in, JSON or XML out,
//! plus a plain-text log of recent requests.

pub mod config;
pub mod error;
pub mod request_log;
pub mod routes;
pub mod server;

// Re-export the kernel crate for integration
pub use impact_core;

/// Server version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
