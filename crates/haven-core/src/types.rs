// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Haven workspace.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Opaque identifier for a conversation session.
///
/// Haven does not persist sessions; the id is echoed back to the caller so a
/// storage layer can be added later without changing the request contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// A single inbound chat message.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// The user's message text.
    pub text: String,
    /// Optional session the message belongs to.
    pub session_id: Option<SessionId>,
    /// ISO 8601 receive timestamp.
    pub received_at: String,
}

impl ChatMessage {
    /// Creates a message stamped with the current UTC time.
    pub fn new(text: impl Into<String>, session_id: Option<SessionId>) -> Self {
        Self {
            text: text.into(),
            session_id,
            received_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Which component produced a reply.
///
/// Every response carries its origin so the request handler can log and audit
/// whether the safety filter, the provider, or the local fallback answered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReplyOrigin {
    /// Fixed crisis response from the safety filter.
    Safety,
    /// AI-generated reply from the external provider.
    Provider,
    /// Deterministic local reply (no credential, or provider failed).
    Fallback,
}

/// The service's reply to a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Reply text.
    pub text: String,
    /// Component that produced the text.
    pub origin: ReplyOrigin,
}

// --- Provider types ---

/// A completion request handed to a [`CompletionProvider`](crate::CompletionProvider).
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model identifier (e.g., "gpt-4o-mini").
    pub model: String,
    /// Optional system prompt prepended to the conversation.
    pub system_prompt: Option<String>,
    /// The user's message text.
    pub user_text: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

/// A completion returned by a provider.
#[derive(Debug, Clone)]
pub struct CompletionReply {
    /// Provider-assigned response id.
    pub id: String,
    /// Generated reply text.
    pub text: String,
    /// Model that generated the response.
    pub model: String,
    /// Token usage statistics.
    pub usage: TokenUsage,
}

/// Token usage reported by a provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated in the completion.
    pub completion_tokens: u32,
}
