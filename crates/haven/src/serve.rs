// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `haven serve` command implementation.
//!
//! Wires the configured pieces together: the OpenAI provider when an API key
//! is present, the chat engine with its safety filter and fallback tables,
//! and the HTTP gateway with graceful shutdown on SIGTERM/SIGINT.

use std::sync::Arc;
use std::time::Duration;

use haven_agent::{ChatEngine, shutdown};
use haven_config::HavenConfig;
use haven_core::{CompletionProvider, HavenError};
use haven_gateway::{GatewayState, ServerConfig, start_server};
use haven_openai::{OpenAiClient, OpenAiProvider};
use tracing::info;

/// Runs the `haven serve` command.
pub async fn run_serve(config: HavenConfig) -> Result<(), HavenError> {
    init_tracing(&config.agent.log_level);

    info!(name = %config.agent.name, "starting haven serve");

    let provider: Option<Arc<dyn CompletionProvider>> = match config.openai.api_key.as_deref() {
        Some(api_key) => {
            let client = OpenAiClient::new(
                api_key,
                config.openai.model.clone(),
                Duration::from_secs(config.openai.timeout_secs),
            )?;
            info!(model = %config.openai.model, "AI replies enabled");
            Some(Arc::new(OpenAiProvider::new(client)))
        }
        None => {
            info!("no OpenAI API key configured, answering from local fallback tables");
            None
        }
    };

    let engine = ChatEngine::new(&config, provider)?;
    let state = GatewayState::new(Arc::new(engine));

    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };

    let shutdown_token = shutdown::install_signal_handler();
    start_server(&server_config, state, shutdown_token).await?;

    info!("haven shut down cleanly");
    Ok(())
}

/// Initializes the tracing subscriber from config, with RUST_LOG override.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("haven={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
