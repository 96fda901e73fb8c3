// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`CompletionProvider`] implementation backed by [`OpenAiClient`].

use async_trait::async_trait;
use haven_core::{
    CompletionProvider, CompletionReply, CompletionRequest, HavenError, TokenUsage,
};

use crate::client::OpenAiClient;
use crate::types::{ApiMessage, ChatCompletionRequest};

/// OpenAI-backed reply provider.
///
/// Thin adapter that maps the engine's provider-neutral request onto the
/// Chat Completions wire format and extracts the first choice.
pub struct OpenAiProvider {
    client: OpenAiClient,
}

impl OpenAiProvider {
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, HavenError> {
        let model = if request.model.is_empty() {
            self.client.default_model().to_string()
        } else {
            request.model
        };

        let mut messages = Vec::with_capacity(2);
        if let Some(system) = request.system_prompt {
            messages.push(ApiMessage::system(system));
        }
        messages.push(ApiMessage::user(request.user_text));

        let api_request = ChatCompletionRequest {
            model,
            messages,
            max_tokens: request.max_tokens,
        };

        let response = self.client.complete_chat(&api_request).await?;

        let choice = response.choices.into_iter().next().ok_or_else(|| {
            HavenError::Provider {
                message: "API response contained no choices".into(),
                source: None,
            }
        })?;

        Ok(CompletionReply {
            id: response.id,
            text: choice.message.content,
            model: response.model,
            usage: TokenUsage {
                prompt_tokens: response.usage.prompt_tokens,
                completion_tokens: response.usage.completion_tokens,
            },
        })
    }
}
