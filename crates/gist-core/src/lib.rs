// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Core logic of the gist summary service: the wire contract types for
//! `POST /summaries` and the whitespace tokenization / ten-word truncation
//! algorithm they are built from.
//!
//! This crate does no I/O.  The server maps [`summarize`] onto HTTP; the
//! client reuses [`count_words`] to re-derive the word count from a summary
//! it received over the wire.

mod summarize;
mod types;

pub use summarize::{count_words, summarize, truncate_words, SummarizeError, WORD_LIMIT};
pub use types::{SummaryRequest, SummaryResponse};
