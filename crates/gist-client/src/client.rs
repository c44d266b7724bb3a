// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! The client itself: request construction, response validation, and error
//! classification.  The classification helpers are free functions so they can
//! be unit-tested without making HTTP requests.

use gist_core::count_words;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::ClientError;

/// A summary as seen by client callers.
///
/// `word_count` is the client's own computation from `summary`, never the
/// server's reported field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub summary: String,
    pub timestamp: String,
    pub word_count: usize,
}

/// Client for a single summary service endpoint.
#[derive(Debug)]
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SummaryClient {
    /// Construct a client for the service at `base_url`.
    ///
    /// Fails with [`ClientError::Contract`] when `base_url` is empty.  At
    /// most one trailing slash is stripped before the operation path is
    /// appended.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        if base_url.trim().is_empty() {
            return Err(ClientError::Contract(
                "base URL must be a non-empty string".into(),
            ));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint: endpoint_url(base_url),
        })
    }

    /// `POST /summaries` with the given text.
    ///
    /// A single request, no retries, transport-default timeout.  Empty text
    /// fails locally before any network traffic.
    pub async fn create_summary(&self, text: &str) -> Result<Summary, ClientError> {
        if text.is_empty() {
            return Err(ClientError::Contract(
                "text must be a non-empty string".into(),
            ));
        }

        debug!(endpoint = %self.endpoint, "sending summary request");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| classify_transport_error(e, &self.endpoint))?;

        let status = response.status();
        let body = response.text().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            return Err(classify_api_error(status, &body));
        }

        parse_success_body(&body)
    }
}

/// Strip exactly one trailing slash, then append the operation path.
fn endpoint_url(base_url: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    format!("{base}/summaries")
}

/// Connection failures get a connectivity-specific variant naming the target
/// URL; any other transport fault propagates unchanged.
fn classify_transport_error(err: reqwest::Error, url: &str) -> ClientError {
    if err.is_connect() || err.is_timeout() {
        ClientError::Network {
            url: url.to_string(),
            source: err,
        }
    } else {
        ClientError::Transport(err)
    }
}

/// Build a [`ClientError::Api`] from a non-success status and raw body.
///
/// Prefers the server's `detail` field as the message; falls back to the
/// status canonical reason when the body is not JSON or carries no detail.
fn classify_api_error(status: reqwest::StatusCode, body: &str) -> ClientError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });
    ClientError::Api {
        message,
        status: status.as_u16(),
        body: parsed,
    }
}

/// Structural validation of a success body: `summary` and `timestamp` must
/// both be strings, else the whole response is rejected rather than
/// half-populated.  `word_count` is recomputed locally from `summary`
/// with the same whitespace-split rule the server uses.
fn parse_success_body(body: &str) -> Result<Summary, ClientError> {
    let v: Value = serde_json::from_str(body)
        .map_err(|e| ClientError::MalformedResponse(format!("body is not JSON: {e}")))?;

    let summary = v
        .get("summary")
        .and_then(Value::as_str)
        .ok_or_else(|| ClientError::MalformedResponse("`summary` is missing or not a string".into()))?;
    let timestamp = v
        .get("timestamp")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ClientError::MalformedResponse("`timestamp` is missing or not a string".into())
        })?;

    Ok(Summary {
        summary: summary.to_string(),
        timestamp: timestamp.to_string(),
        word_count: count_words(summary),
    })
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    // ── URL construction ──────────────────────────────────────────────────────

    #[test]
    fn endpoint_appends_operation_path() {
        assert_eq!(
            endpoint_url("http://localhost:8787"),
            "http://localhost:8787/summaries"
        );
    }

    #[test]
    fn endpoint_strips_one_trailing_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8787/"),
            "http://localhost:8787/summaries"
        );
    }

    #[test]
    fn endpoint_strips_at_most_one_slash() {
        assert_eq!(
            endpoint_url("http://localhost:8787//"),
            "http://localhost:8787//summaries"
        );
    }

    #[test]
    fn empty_base_url_is_a_contract_error() {
        let err = SummaryClient::new("").unwrap_err();
        assert!(matches!(err, ClientError::Contract(_)), "got {err:?}");
    }

    // ── Non-success classification ────────────────────────────────────────────

    #[test]
    fn api_error_uses_server_detail_when_present() {
        let err = classify_api_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":"text must not be empty or whitespace-only"}"#,
        );
        match err {
            ClientError::Api {
                message,
                status,
                body,
            } => {
                assert_eq!(message, "text must not be empty or whitespace-only");
                assert_eq!(status, 422);
                assert!(body.is_some(), "parsed body must be carried along");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_status_reason_without_detail() {
        let err = classify_api_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"oops":true}"#);
        match err {
            ClientError::Api { message, status, .. } => {
                assert_eq!(message, "Internal Server Error");
                assert_eq!(status, 500);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn api_error_on_non_json_body_has_no_raw_body() {
        let err = classify_api_error(StatusCode::BAD_GATEWAY, "<html>oops</html>");
        match err {
            ClientError::Api { message, body, .. } => {
                assert_eq!(message, "Bad Gateway");
                assert!(body.is_none());
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn api_error_non_string_detail_falls_back_to_reason() {
        let err = classify_api_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":[1,2]}"#);
        match err {
            ClientError::Api { message, .. } => assert_eq!(message, "Unprocessable Entity"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    // ── Success body validation ───────────────────────────────────────────────

    #[test]
    fn success_body_word_count_is_recomputed_not_passed_through() {
        // The server reports 999; the client must ignore it.
        let s = parse_success_body(
            r#"{"summary":"Hello world","timestamp":"2026-01-01T00:00:00.000000+00:00","word_count":999}"#,
        )
        .unwrap();
        assert_eq!(s.summary, "Hello world");
        assert_eq!(s.word_count, 2);
    }

    #[test]
    fn success_body_missing_summary_is_malformed() {
        let err = parse_success_body(r#"{"timestamp":"t","word_count":1}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)), "got {err:?}");
    }

    #[test]
    fn success_body_non_string_summary_is_malformed() {
        let err =
            parse_success_body(r#"{"summary":7,"timestamp":"t","word_count":1}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)), "got {err:?}");
    }

    #[test]
    fn success_body_missing_timestamp_is_malformed() {
        let err = parse_success_body(r#"{"summary":"hi","word_count":1}"#).unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)), "got {err:?}");
    }

    #[test]
    fn success_body_not_json_is_malformed() {
        let err = parse_success_body("not json at all").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)), "got {err:?}");
    }

    #[test]
    fn recomputed_count_matches_the_service_rule() {
        // Ten-or-fewer-word summaries round-trip exactly, so the recomputed
        // count must agree with what the service would report.
        let s = parse_success_body(
            r#"{"summary":"one two three four five six seven eight nine ten","timestamp":"t","word_count":10}"#,
        )
        .unwrap();
        assert_eq!(s.word_count, 10);
        assert_eq!(s.word_count, gist_core::count_words(&s.summary));
    }
}
