// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Whitespace tokenization and ten-word truncation.
//!
//! The algorithm is a deterministic truncation, not semantic compression:
//!
//! 1. Trim the input; an empty or whitespace-only result is rejected.
//! 2. Split on runs of whitespace (`str::split_whitespace`; spaces, tabs,
//!    and newlines are treated uniformly, consecutive separators collapse).
//! 3. Keep the first [`WORD_LIMIT`] tokens in input order and rejoin them
//!    with single ASCII spaces.
//!
//! For inputs of ten or fewer words the summary equals the
//! whitespace-normalized input; the operation is never lossy in that range.

use chrono::{SecondsFormat, Utc};
use thiserror::Error;

use crate::SummaryResponse;

/// Maximum number of tokens carried into a summary.
pub const WORD_LIMIT: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummarizeError {
    /// Empty or whitespace-only input (identical rejection for both).
    #[error("text must not be empty or whitespace-only")]
    InvalidInput,
}

/// Reduce `text` to its leading ten words and stamp the result.
///
/// The timestamp is captured at response construction, not request arrival,
/// and is never cached or reused across calls.
pub fn summarize(text: &str) -> Result<SummaryResponse, SummarizeError> {
    let summary = truncate_words(text)?;
    // Counted from the truncated summary, not the original token count.
    let word_count = count_words(&summary);
    Ok(SummaryResponse {
        summary,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        word_count,
    })
}

/// The first `min(10, N)` whitespace-delimited tokens of `text`, rejoined
/// with single spaces.  Fails on empty or whitespace-only input.
pub fn truncate_words(text: &str) -> Result<String, SummarizeError> {
    if text.trim().is_empty() {
        return Err(SummarizeError::InvalidInput);
    }
    let tokens: Vec<&str> = text.split_whitespace().take(WORD_LIMIT).collect();
    Ok(tokens.join(" "))
}

/// Count whitespace-delimited tokens; empty or whitespace-only text yields 0.
///
/// This is the exact rule the client uses to re-derive `word_count` from a
/// received summary, so it must stay in lock-step with [`truncate_words`].
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// ── Unit tests ────────────────────────────────────────────────────────────────
