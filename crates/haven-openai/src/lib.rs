// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI Chat Completions integration for the Haven chat service.
//!
//! The API key is injected at construction; nothing here reads the process
//! environment. When no key is configured the service simply never builds
//! this provider and answers from the local fallback generator instead.

pub mod client;
pub mod provider;
pub mod types;

pub use client::OpenAiClient;
pub use provider::OpenAiProvider;
