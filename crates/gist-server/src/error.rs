// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! HTTP error mapping.
//!
//! Every variant renders as a JSON body with a human-readable `detail` field,
//! matching what the typed client looks for when it classifies a non-success
//! response.  Validation failures are recovered into a `422`; they are never
//! fatal to the process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gist_core::SummarizeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body failed input validation.
    #[error("{0}")]
    Validation(#[from] SummarizeError),

    /// Any uncaught fault inside a handler.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
