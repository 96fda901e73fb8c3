// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! `MockProvider` implements `CompletionProvider` with pre-configured
//! responses, enabling fast, CI-runnable tests without external API calls.
//! It also counts invocations so tests can assert the provider was never
//! called on safety-filtered or fallback paths.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use haven_core::{CompletionProvider, CompletionReply, CompletionRequest, HavenError, TokenUsage};

/// Behavior of the mock on each call.
enum Mode {
    /// Pop responses from the queue, defaulting when empty.
    Respond,
    /// Always return a provider error.
    Fail,
    /// Sleep for the given duration, then respond. Pair with
    /// `tokio::time::pause` to exercise timeout paths instantly.
    Slow(Duration),
}

/// A mock provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty,
/// a default "mock response" text is returned.
pub struct MockProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    calls: AtomicUsize,
    mode: Mode,
}

impl MockProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
            mode: Mode::Respond,
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            calls: AtomicUsize::new(0),
            mode: Mode::Respond,
        }
    }

    /// Create a mock provider that fails every call.
    pub fn failing() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
            mode: Mode::Fail,
        }
    }

    /// Create a mock provider that sleeps before responding.
    pub fn slow(delay: Duration) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: AtomicUsize::new(0),
            mode: Mode::Slow(delay),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// How many times `complete` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Pop the next response, or return the default.
    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock-provider"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionReply, HavenError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match self.mode {
            Mode::Fail => {
                return Err(HavenError::Provider {
                    message: "mock provider failure".into(),
                    source: None,
                });
            }
            Mode::Slow(delay) => tokio::time::sleep(delay).await,
            Mode::Respond => {}
        }

        let text = self.next_response().await;
        Ok(CompletionReply {
            id: format!("mock-resp-{}", uuid::Uuid::new_v4()),
            text,
            model: request.model,
            usage: TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
            },
        })
    }
}
