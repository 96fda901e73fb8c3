// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Haven chat service.
//!
//! Provides the foundational trait definitions, error type, and common types
//! used throughout the Haven workspace. The safety filter and reply generator
//! both plug in through traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::HavenError;
pub use types::{
    ChatMessage, ChatReply, CompletionReply, CompletionRequest, ReplyOrigin, SessionId, TokenUsage,
};

pub use traits::{CompletionProvider, CrisisDetector};
