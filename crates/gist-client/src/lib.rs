// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: Apache-2.0
//!
//! Typed client for the gist summary service.
//!
//! The client depends on the service's wire contract only.  It validates its
//! own inputs before any network call, classifies every non-success outcome,
//! and deliberately recomputes the word count from the returned summary
//! instead of trusting the server's reported value.  That re-derivation is
//! the one end-to-end consistency check in the system and must not be
//! "optimized away" into a pass-through.

mod client;
mod error;

pub use client::{Summary, SummaryClient};
pub use error::ClientError;
