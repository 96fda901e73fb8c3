// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message handling pipeline for the Haven chat service.
//!
//! Wires the sentiment analyzer, safety filter, optional AI provider, and
//! deterministic fallback generator into a single [`ChatEngine`], plus
//! graceful shutdown signal handling for the server.

pub mod pipeline;
pub mod shutdown;

pub use pipeline::{ChatEngine, RequestState};
pub use shutdown::install_signal_handler;
