// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Haven chat service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Haven configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HavenConfig {
    /// Service identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP server bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenAI API settings. A missing api_key disables AI replies; the
    /// service then answers from the local fallback generator.
    #[serde(default)]
    pub openai: OpenAiConfig,

    /// Safety filter settings.
    #[serde(default)]
    pub safety: SafetyConfig,
}

/// Service identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the chat service.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Inline system prompt sent with every provider request.
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            system_prompt: default_system_prompt(),
        }
    }
}

fn default_agent_name() -> String {
    "haven".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_system_prompt() -> String {
    "You are a supportive, empathetic listener. Keep replies brief and kind. \
     You are not a therapist and must encourage professional help for serious concerns."
        .to_string()
}

/// HTTP server bind configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind. Loopback by default; deployment behind a
    /// reverse proxy is expected for anything else.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

/// OpenAI API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenAiConfig {
    /// OpenAI API key. `None` means AI replies are disabled, not an error.
    /// Also settable via the OPENAI_API_KEY environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model to use for completion requests.
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum tokens to generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds. A provider call that exceeds this resolves
    /// to the local fallback reply.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    256
}

fn default_timeout_secs() -> u64 {
    30
}

/// Safety filter configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SafetyConfig {
    /// Extra crisis keywords merged with the built-in list.
    #[serde(default)]
    pub extra_keywords: Vec<String>,

    /// Compound sentiment score at or below which a message is treated as a
    /// crisis even without a keyword match. Range [-1, 0].
    #[serde(default = "default_despair_threshold")]
    pub despair_threshold: f32,
}

impl Default for SafetyConfig {
    fn default() -> Self {
        Self {
            extra_keywords: Vec::new(),
            despair_threshold: default_despair_threshold(),
        }
    }
}

fn default_despair_threshold() -> f32 {
    -0.85
}
