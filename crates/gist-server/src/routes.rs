// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Route handlers.  All state is request-scoped; the handlers share nothing.

use axum::Json;
use gist_core::{summarize, SummaryRequest, SummaryResponse};

use crate::error::ApiError;

/// `POST /summaries`: reduce the input to its leading ten words.
///
/// Empty or whitespace-only text is rejected with a 422; the `?` conversion
/// routes [`gist_core::SummarizeError`] through [`ApiError::Validation`].
pub async fn create_summary(
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let response = summarize(&req.text)?;
    Ok(Json(response))
}

/// `GET /health`: liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ── Unit tests ────────────────────────────────────────────────────────────────
