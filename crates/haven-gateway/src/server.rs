// SPDX-FileCopyrightText: 2026 Haven Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The router is factored out
//! of the serve loop so tests can drive it with `tower::ServiceExt::oneshot`
//! without binding a socket.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    routing::{get, post},
};
use haven_agent::ChatEngine;
use haven_core::HavenError;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// The message handling pipeline.
    pub engine: Arc<ChatEngine>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl GatewayState {
    pub fn new(engine: Arc<ChatEngine>) -> Self {
        Self {
            engine,
            start_time: Instant::now(),
        }
    }
}

/// Server bind configuration (mirrors ServerConfig from haven-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the application router.
///
/// Routes:
/// - GET  /          embedded chat page
/// - POST /api/chat  chat endpoint
/// - GET  /health    liveness and AI availability
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index))
        .route("/api/chat", post(handlers::post_chat))
        .route("/health", get(handlers::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Start the chat HTTP server.
///
/// Binds to the configured host:port and serves until the shutdown token
/// is cancelled; in-flight requests are allowed to finish.
pub async fn start_server(
    config: &ServerConfig,
    state: GatewayState,
    shutdown: CancellationToken,
) -> Result<(), HavenError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| HavenError::Internal(format!("failed to bind server to {addr}: {e}")))?;

    tracing::info!("Haven listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| HavenError::Internal(format!("server error: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use haven_config::HavenConfig;
    use haven_core::CompletionProvider;
    use haven_safety::CRISIS_MESSAGE;
    use haven_test_utils::MockProvider;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_router() -> Router {
        let engine = ChatEngine::new(&HavenConfig::default(), None).unwrap();
        build_router(GatewayState::new(Arc::new(engine)))
    }

    fn test_router_with_provider(provider: Arc<MockProvider>) -> Router {
        let engine = ChatEngine::new(
            &HavenConfig::default(),
            Some(provider as Arc<dyn CompletionProvider>),
        )
        .unwrap();
        build_router(GatewayState::new(Arc::new(engine)))
    }

    fn chat_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn chat_returns_fallback_reply_without_provider() {
        let app = test_router();
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "message": "my exam is next week",
                "session_id": "abc-123"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["origin"], "fallback");
        assert_eq!(body["session_id"], "abc-123");
        assert!(!body["reply"].as_str().unwrap().is_empty());
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert!(!body["created_at"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_message_is_rejected_with_400() {
        let app = test_router();
        let response = app
            .oneshot(chat_request(serde_json::json!({"message": "   "})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(
            body["error"].as_str().unwrap().contains("empty"),
            "got: {body}"
        );
    }

    #[tokio::test]
    async fn crisis_message_returns_safety_reply_with_200() {
        let app = test_router();
        let response = app
            .oneshot(chat_request(serde_json::json!({
                "message": "i want to end my life"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["origin"], "safety");
        assert_eq!(body["reply"], CRISIS_MESSAGE);
    }

    #[tokio::test]
    async fn provider_failure_still_returns_200_with_fallback() {
        let provider = Arc::new(MockProvider::failing());
        let app = test_router_with_provider(provider.clone());

        let response = app
            .oneshot(chat_request(serde_json::json!({
                "message": "work has been busy lately"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["origin"], "fallback");
        assert!(!body["reply"].as_str().unwrap().is_empty());
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn provider_timeout_still_returns_200_with_fallback() {
        // Default config timeout is 30s; the mock sleeps for 60s.
        let provider = Arc::new(MockProvider::slow(Duration::from_secs(60)));
        let app = test_router_with_provider(provider);

        let response = app
            .oneshot(chat_request(serde_json::json!({
                "message": "just checking in"
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["origin"], "fallback");
    }

    #[tokio::test]
    async fn session_id_is_omitted_when_not_sent() {
        let app = test_router();
        let response = app
            .oneshot(chat_request(serde_json::json!({"message": "hello"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body.get("session_id").is_none(), "got: {body}");
    }

    #[tokio::test]
    async fn health_reports_ai_disabled_without_provider() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["ai_enabled"], false);
    }

    #[tokio::test]
    async fn index_serves_the_chat_page() {
        let app = test_router();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("<html"), "should serve HTML");
        assert!(html.contains("/api/chat"), "page should talk to the chat API");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_router();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
