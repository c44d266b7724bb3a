// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Request timing/logging middleware.
//!
//! Wraps every inbound call and records the request path, the elapsed
//! wall-clock time with sub-millisecond precision, and the final status code.
//! The middleware is a pure observability side channel: it never touches the
//! response body, status, or headers.
//!
//! # One record per call, on every exit path
//!
//! The record is emitted through [`RequestLog`], a scope guard:
//!
//! - normal completion (including handler-produced error responses such as
//!   the 422 validation path) logs the real status via [`RequestLog::complete`];
//! - if the call never completes (a panic unwinding through the handler, or
//!   the connection task being torn down mid-request), the guard's `Drop`
//!   emits the record with a generic failure code instead.
//!
//! Either way exactly one record is written.  `tracing` serializes writes to
//! the sink, so concurrent calls cannot interleave within a record.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Middleware entry point; installed on the whole router.
pub async fn record_request(req: Request, next: Next) -> Response {
    let mut guard = RequestLog::start(req.uri().path().to_string());
    let response = next.run(req).await;
    guard.complete(response.status().as_u16());
    response
}

/// Scope that guarantees one log record per request.
struct RequestLog {
    path: String,
    start: Instant,
    emitted: bool,
}

impl RequestLog {
    fn start(path: String) -> Self {
        Self {
            path,
            start: Instant::now(),
            emitted: false,
        }
    }

    /// Record the final status of a normally-completed call.
    fn complete(&mut self, status: u16) {
        self.emit(status);
    }

    /// Emit the record once; later calls are no-ops.  Returns whether this
    /// call actually wrote the record.
    fn emit(&mut self, status: u16) -> bool {
        if self.emitted {
            return false;
        }
        self.emitted = true;
        let elapsed_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        info!(
            path = %self.path,
            status,
            elapsed_ms = %format_args!("{elapsed_ms:.3}"),
            "request completed"
        );
        true
    }
}

impl Drop for RequestLog {
    fn drop(&mut self) {
        // Only fires when complete() never ran: the handler panicked or the
        // request future was dropped before producing a response.
        self.emit(500);
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
