//! Bounded in-memory request log
//!
//! Every request handled by the router is appended as one tab-separated line:
//! `{METHOD}\t\t{path}\t\t{status}\t\t{elapsed:02}ms`. The oldest lines are
//! dropped once the configured capacity is reached.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::routes::AppState;

/// Shared ring of formatted request lines
#[derive(Debug, Clone)]
pub struct RequestLog {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl RequestLog {
    /// Create an empty log holding at most `capacity` lines
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Maximum number of retained lines
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of retained lines
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether no request has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Append one request, evicting the oldest line when full
    pub fn record(&self, method: &Method, path: &str, status: StatusCode, elapsed: Duration) {
        let line = format_line(method, path, status, elapsed);
        let mut lines = self.lock();
        while lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// All retained lines, oldest first, each terminated by a newline
    pub fn render(&self) -> String {
        self.lock().iter().fold(String::new(), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
    }

    // A panic while holding the lock cannot leave a half-written line behind.
    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Format a single log line
pub fn format_line(method: &Method, path: &str, status: StatusCode, elapsed: Duration) -> String {
    format!(
        "{}\t\t{}\t\t{}\t\t{:02}ms",
        method,
        path,
        status.as_u16(),
        elapsed.as_millis()
    )
}

/// Middleware that times each request and appends it to the shared log
pub async fn record_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    tracing::debug!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = elapsed.as_millis() as u64,
        "Request handled"
    );
    state
        .request_log
        .record(&method, &path, response.status(), elapsed);

    response
}
