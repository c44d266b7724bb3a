// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
use serde_json::Value;
use thiserror::Error;

/// Failures observable by callers of [`crate::SummaryClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// A pre-flight check failed; no network call was attempted.
    #[error("invalid request: {0}")]
    Contract(String),

    /// The server answered with a non-success status.  `message` is the
    /// server's `detail` field when present, else the status reason; `body`
    /// carries the raw JSON body when it parsed.
    #[error("API error {status}: {message}")]
    Api {
        message: String,
        status: u16,
        body: Option<Value>,
    },

    /// Success status, but the body failed structural validation.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The transport could not establish or complete the connection.
    #[error("could not connect to {url}; check that the server is running")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Any other transport fault, propagated unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}
