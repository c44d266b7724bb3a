use serde::{Deserialize, Serialize};

/// Request body for `POST /summaries`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// Raw input text.  The field has no default: a missing or non-string
    /// `text` is rejected during deserialization, before validation runs.
    pub text: String,
}

/// Success body for `POST /summaries`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The first `min(10, N)` whitespace-delimited tokens of the input,
    /// rejoined with single ASCII spaces.
    pub summary: String,
    /// UTC instant of response construction: RFC 3339 with microsecond
    /// precision and an explicit `+00:00` offset.
    pub timestamp: String,
    /// Token count of `summary`, always in `1..=10` for an accepted request.
    pub word_count: usize,
}

// ── Unit tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_from_wire_json() {
        let r: SummaryRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(r.text, "hello");
    }

    #[test]
    fn request_rejects_missing_text() {
        let r = serde_json::from_str::<SummaryRequest>("{}");
        assert!(r.is_err(), "absent text must fail deserialization");
    }

    #[test]
    fn request_rejects_non_string_text() {
        let r = serde_json::from_str::<SummaryRequest>(r#"{"text":42}"#);
        assert!(r.is_err(), "non-string text must fail deserialization");
    }

    #[test]
    fn response_serializes_all_three_fields() {
        let resp = SummaryResponse {
            summary: "Hello world".into(),
            timestamp: "2026-01-01T00:00:00.000000+00:00".into(),
            word_count: 2,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"timestamp\""));
        assert!(json.contains("\"word_count\":2"));
    }
}
