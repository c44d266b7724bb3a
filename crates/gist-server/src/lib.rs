// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! HTTP server exposing the summary operation.
//!
//! # Routes
//!
//! | Route             | Method | Behaviour                                    |
//! |-------------------|--------|----------------------------------------------|
//! | `/summaries`      | POST   | Validate, tokenize, truncate, timestamp      |
//! | `/health`         | GET    | Liveness probe, `{"status":"ok"}`            |
//!
//! Every route is wrapped by the [`timing`] middleware, which emits exactly
//! one log record per call (path, elapsed time, status) on every exit path.
//!
//! Validation failures return `422` with a JSON body carrying a
//! human-readable `detail` field; the process never terminates on a bad
//! request.  The service is stateless; nothing is shared across requests
//! beyond the tracing sink.

pub mod config;

mod error;
mod routes;
mod timing;

pub use config::ServerConfig;
pub use error::ApiError;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;

/// Build the application router for the given configuration.
///
/// The timing layer is outermost so it observes every call, including
/// requests rejected below the handlers (e.g. by the body-size limit).
pub fn router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/summaries", post(routes::create_summary))
        .route("/health", get(routes::health))
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(middleware::from_fn(timing::record_request))
}

/// Bind the configured address and serve until shutdown.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;

    info!(bind = %config.bind, "starting summary server");

    axum::serve(listener, router(&config))
        .await
        .context("HTTP server error")?;

    Ok(())
}
