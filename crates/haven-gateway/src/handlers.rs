// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the chat API.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use haven_core::{ChatMessage, ReplyOrigin, SessionId};

use crate::page::CHAT_PAGE;
use crate::server::GatewayState;

/// Request body for POST /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user's message text.
    pub message: String,
    /// Optional client-chosen session identifier, echoed back unchanged.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Server-assigned reply ID.
    pub id: String,
    /// The reply text.
    pub reply: String,
    /// Which stage produced the reply: safety, provider, or fallback.
    pub origin: ReplyOrigin,
    /// Echo of the request's session identifier, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// RFC 3339 timestamp of reply creation.
    pub created_at: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok" when the service is up.
    pub status: String,
    /// Whether an AI provider is configured.
    pub ai_enabled: bool,
    /// Seconds since the server started.
    pub uptime_secs: u64,
}

/// POST /api/chat: run a message through the chat engine.
///
/// Invalid input (an empty message) is a 400; everything else, including
/// provider failures, resolves to a 200 with the reply's origin field
/// telling the client which stage answered.
pub async fn post_chat(
    State(state): State<GatewayState>,
    Json(request): Json<ChatRequest>,
) -> Response {
    let session_id = request.session_id.clone().map(SessionId);
    let message = ChatMessage::new(request.message, session_id);

    match state.engine.handle(&message).await {
        Ok(reply) => {
            debug!(origin = %reply.origin, "chat reply ready");
            let body = ChatResponse {
                id: uuid::Uuid::new_v4().to_string(),
                reply: reply.text,
                origin: reply.origin,
                session_id: request.session_id,
                created_at: chrono::Utc::now().to_rfc3339(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) if e.is_client_error() => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "chat handler failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /health: liveness plus whether AI replies are enabled.
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        ai_enabled: state.engine.has_provider(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /: the embedded single-page chat client.
pub async fn get_index() -> Html<&'static str> {
    Html(CHAT_PAGE)
}
