// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sentiment scoring for the Haven chat service.
//!
//! A self-contained, lexicon-based analyzer producing a VADER-style compound
//! score in [-1.0, 1.0] and a coarse positive/neutral/negative label. Used by
//! the safety filter (despair escalation) and the fallback reply generator
//! (tone selection).

pub mod analyzer;
pub mod lexicon;

pub use analyzer::{NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD, Sentiment, SentimentAnalyzer};
