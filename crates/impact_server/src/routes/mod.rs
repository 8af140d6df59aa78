//! Route modules for the impact server
//!
//! - estimate: outbreak impact endpoints and the request log
//! - health: health check and readiness endpoints

pub mod estimate;
pub mod health;

use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::request_log::{record_requests, RequestLog};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// Recent requests served by the logs endpoint
    pub request_log: RequestLog,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let request_log = RequestLog::new(config.request_log_capacity);
        Self {
            config,
            start_time: std::time::Instant::now(),
            request_log,
        }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    build_router_with_state(AppState::new(config))
}

/// Build the router around an existing state
pub fn build_router_with_state(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(estimate::routes())
        .layer(middleware::from_fn_with_state(state.clone(), record_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
