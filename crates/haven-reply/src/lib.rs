// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local fallback reply generation for the Haven chat service.
//!
//! When no AI provider is configured, or a provider call fails or times out,
//! the service answers from canned sentiment-matched tables with coping tips
//! and topic acknowledgement. Selection is a stable hash of the message, so
//! fallback replies are fully deterministic.

pub mod generator;
pub mod tables;

pub use generator::{FallbackReplier, extract_tags};
