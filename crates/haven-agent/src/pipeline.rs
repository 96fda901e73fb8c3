// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-request pipeline that turns an incoming chat message into a reply.
//!
//! Each request moves through states: Received -> Filtered, then either
//! SafetyResponse (filter tripped) or Generating -> Replied / FallbackReplied.
//!
//! Ordering is load-bearing: validation, then sentiment scoring, then the
//! safety filter, and only then, if a provider is configured, the provider
//! call. A message that trips the filter never reaches the provider, and a
//! provider failure or timeout degrades into the local fallback reply rather
//! than an error response.

use std::sync::Arc;
use std::time::Duration;

use haven_config::HavenConfig;
use haven_core::{
    ChatMessage, ChatReply, CompletionProvider, CompletionRequest, CrisisDetector, HavenError,
    ReplyOrigin,
};
use haven_reply::FallbackReplier;
use haven_safety::{CRISIS_MESSAGE, CrisisFilter, KeywordDetector};
use haven_sentiment::{Sentiment, SentimentAnalyzer};
use tracing::{debug, info, warn};

/// States in the per-request FSM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Message accepted, not yet screened.
    Received,
    /// Sentiment scored and safety screening complete.
    Filtered,
    /// Filter tripped; the fixed crisis reply is being returned.
    SafetyResponse,
    /// Provider call in flight.
    Generating,
    /// Provider produced the reply.
    Replied,
    /// Local fallback produced the reply.
    FallbackReplied,
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestState::Received => write!(f, "received"),
            RequestState::Filtered => write!(f, "filtered"),
            RequestState::SafetyResponse => write!(f, "safety_response"),
            RequestState::Generating => write!(f, "generating"),
            RequestState::Replied => write!(f, "replied"),
            RequestState::FallbackReplied => write!(f, "fallback_replied"),
        }
    }
}

/// The chat engine: safety filter, sentiment analyzer, optional AI provider,
/// and deterministic fallback generation.
pub struct ChatEngine {
    analyzer: SentimentAnalyzer,
    filter: CrisisFilter,
    fallback: FallbackReplier,
    provider: Option<Arc<dyn CompletionProvider>>,
    model: String,
    system_prompt: String,
    max_tokens: u32,
    provider_timeout: Duration,
}

impl ChatEngine {
    /// Build an engine from configuration with the default keyword detector.
    ///
    /// `provider` is `None` when no API credential is configured; the engine
    /// then answers every non-crisis message from the fallback tables.
    pub fn new(
        config: &HavenConfig,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Result<Self, HavenError> {
        let detector = KeywordDetector::with_extra_keywords(&config.safety.extra_keywords)?;
        Ok(Self::with_detector(config, Box::new(detector), provider))
    }

    /// Build an engine around a custom crisis detector.
    pub fn with_detector(
        config: &HavenConfig,
        detector: Box<dyn CrisisDetector>,
        provider: Option<Arc<dyn CompletionProvider>>,
    ) -> Self {
        Self {
            analyzer: SentimentAnalyzer::new(),
            filter: CrisisFilter::new(detector, config.safety.despair_threshold),
            fallback: FallbackReplier::new(),
            provider,
            model: config.openai.model.clone(),
            system_prompt: config.agent.system_prompt.clone(),
            max_tokens: config.openai.max_tokens,
            provider_timeout: Duration::from_secs(config.openai.timeout_secs),
        }
    }

    /// Whether an AI provider is wired in.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Process one message into a reply.
    ///
    /// Returns `Err(HavenError::Input)` only for invalid input; provider
    /// trouble is absorbed into a fallback reply.
    pub async fn handle(&self, message: &ChatMessage) -> Result<ChatReply, HavenError> {
        let mut state = RequestState::Received;
        debug!(state = %state, received_at = %message.received_at, "message accepted");

        let text = message.text.trim();
        if text.is_empty() {
            return Err(HavenError::Input("message must not be empty".into()));
        }

        let compound = self.analyzer.compound(text);
        let screened = self.filter.screen(text, compound);
        state = RequestState::Filtered;
        debug!(state = %state, compound, "message screened");

        if let Some(signal) = screened {
            state = RequestState::SafetyResponse;
            info!(state = %state, ?signal, "returning crisis reply");
            return Ok(ChatReply {
                text: CRISIS_MESSAGE.to_string(),
                origin: ReplyOrigin::Safety,
            });
        }

        if let Some(provider) = &self.provider {
            state = RequestState::Generating;
            debug!(state = %state, provider = provider.name(), "calling provider");

            let request = CompletionRequest {
                model: self.model.clone(),
                system_prompt: Some(self.system_prompt.clone()),
                user_text: text.to_string(),
                max_tokens: self.max_tokens,
            };

            match tokio::time::timeout(self.provider_timeout, provider.complete(request)).await {
                Ok(Ok(reply)) => {
                    state = RequestState::Replied;
                    info!(
                        state = %state,
                        model = %reply.model,
                        prompt_tokens = reply.usage.prompt_tokens,
                        completion_tokens = reply.usage.completion_tokens,
                        "provider reply"
                    );
                    return Ok(ChatReply {
                        text: reply.text,
                        origin: ReplyOrigin::Provider,
                    });
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "provider failed, using fallback");
                }
                Err(_) => {
                    warn!(
                        timeout_secs = self.provider_timeout.as_secs(),
                        "provider timed out, using fallback"
                    );
                }
            }
        }

        let sentiment = Sentiment::from_compound(compound);
        state = RequestState::FallbackReplied;
        info!(state = %state, sentiment = %sentiment, "fallback reply");
        Ok(ChatReply {
            text: self.fallback.reply(text, sentiment),
            origin: ReplyOrigin::Fallback,
        })
    }
}
