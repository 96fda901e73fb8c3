// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./haven.toml` > `~/.config/haven/haven.toml` >
//! `/etc/haven/haven.toml` with environment variable overrides via the
//! `HAVEN_` prefix, plus the conventional `OPENAI_API_KEY` variable.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::HavenConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/haven/haven.toml` (system-wide)
/// 3. `~/.config/haven/haven.toml` (user XDG config)
/// 4. `./haven.toml` (local directory)
/// 5. `HAVEN_*` environment variables
/// 6. `OPENAI_API_KEY` (maps to `openai.api_key`)
pub fn load_config() -> Result<HavenConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG or env lookup).
///
/// Used for testing and for callers that already hold the config text.
pub fn load_config_from_str(toml_content: &str) -> Result<HavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<HavenConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .merge(api_key_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(HavenConfig::default()))
        .merge(Toml::file("/etc/haven/haven.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("haven/haven.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("haven.toml"))
        .merge(env_provider())
        .merge(api_key_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `HAVEN_OPENAI_MAX_TOKENS` must map to
/// `openai.max_tokens`, not `openai.max.tokens`.
fn env_provider() -> Env {
    Env::prefixed("HAVEN_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: HAVEN_OPENAI_MAX_TOKENS -> "openai_max_tokens"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("server_", "server.", 1)
            .replacen("openai_", "openai.", 1)
            .replacen("safety_", "safety.", 1);
        mapped.into()
    })
}

/// Map the conventional `OPENAI_API_KEY` variable to `openai.api_key`.
///
/// Presence of this variable toggles AI-backed replies on; absence leaves the
/// service in fallback mode. It deliberately merges after `HAVEN_*` so the
/// widely-set convention wins over a stale prefixed override.
fn api_key_provider() -> Env {
    Env::raw()
        .only(&["OPENAI_API_KEY"])
        .map(|_| "openai.api_key".into())
}
