// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Haven chat service.
//!
//! Serves the embedded chat page at `/`, the JSON chat endpoint at
//! `POST /api/chat`, and a health endpoint at `/health`. All reply
//! generation happens in [`haven_agent::ChatEngine`]; this crate only
//! translates between HTTP and the engine.

pub mod handlers;
pub mod page;
pub mod server;

pub use server::{GatewayState, ServerConfig, build_router, start_server};
