// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Haven chat service.

use thiserror::Error;

/// The primary error type used across the Haven workspace.
#[derive(Debug, Error)]
pub enum HavenError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed inbound message (empty text, missing field). Surfaced to the
    /// caller as a client error; never retried.
    #[error("invalid input: {0}")]
    Input(String),

    /// LLM provider errors (API failure, auth rejection, rate limit). Recovered
    /// locally by the fallback reply path; never reaches the caller raw.
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl HavenError {
    /// True for errors the caller caused (4xx-equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, HavenError::Input(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_variants_construct() {
        let _config = HavenError::Config("test".into());
        let _input = HavenError::Input("test".into());
        let _provider = HavenError::Provider {
            message: "test".into(),
            source: None,
        };
        let _timeout = HavenError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        let _internal = HavenError::Internal("test".into());
    }

    #[test]
    fn only_input_is_client_error() {
        assert!(HavenError::Input("empty".into()).is_client_error());
        assert!(!HavenError::Config("bad".into()).is_client_error());
        assert!(
            !HavenError::Provider {
                message: "down".into(),
                source: None
            }
            .is_client_error()
        );
    }

    #[test]
    fn display_includes_message() {
        let err = HavenError::Input("message text must not be empty".into());
        assert!(err.to_string().contains("message text must not be empty"));
    }
}
