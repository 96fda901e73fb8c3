// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Provider trait for LLM completion backends (OpenAI, mocks, etc.).

use async_trait::async_trait;

use crate::error::HavenError;
use crate::types::{CompletionRequest, CompletionReply};

/// A backend that can turn a chat message into an AI-generated reply.
///
/// This is the only seam in the pipeline permitted to perform outbound
/// network I/O. Implementations must apply their own request timeout so a
/// slow backend cannot stall the caller indefinitely.
#[async_trait]
pub trait CompletionProvider: Send + Sync + 'static {
    /// Returns the human-readable name of this provider.
    fn name(&self) -> &str;

    /// Sends a completion request and returns the full reply.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, HavenError>;
}
