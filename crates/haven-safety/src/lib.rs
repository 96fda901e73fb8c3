// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Safety filtering for the Haven chat service.
//!
//! Every incoming message is screened here before any reply generation.
//! Screening combines word-boundary keyword matching against a crisis
//! vocabulary with a sentiment despair threshold; a hit yields a fixed
//! crisis reply and nothing is sent to an AI provider.

pub mod filter;
pub mod keywords;

pub use filter::{CRISIS_MESSAGE, CrisisFilter, CrisisSignal};
pub use keywords::{BUILTIN_KEYWORDS, KeywordDetector, normalize};
