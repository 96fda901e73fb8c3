// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Haven integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests
//! without external services.

pub mod mock_provider;

pub use mock_provider::MockProvider;
