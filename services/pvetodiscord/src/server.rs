//! HTTP surface: webhook intake, log file serving and status endpoints

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::{RequestFields, ServerConfig};
use crate::formatter::Formatter;
use crate::io::HttpClient;
use crate::request::NotificationRequest;
use crate::{RelayError, Result};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub formatter: Arc<Formatter>,
    pub http: Arc<dyn HttpClient>,
    pub request_fields: Arc<RequestFields>,
    pub logs_dir: Arc<PathBuf>,
}

/// Build the axum router
pub fn build_router(state: AppState, server: &ServerConfig) -> Router {
    let logs = ServeDir::new(state.logs_dir.as_path());

    let mut router = Router::new()
        .route("/webhook", post(webhook_handler))
        .route("/health", get(health_handler));
    if server.count_endpoint {
        router = router.route("/count", get(count_handler));
    }

    router
        .nest_service("/logs", logs)
        .layer(DefaultBodyLimit::max(server.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Format and forward one notification, returning the upstream body
pub async fn relay(state: &AppState, request: &NotificationRequest) -> Result<String> {
    let payload = state.formatter.build_payload(request).await;
    let body = serde_json::to_string(&payload)?;

    let response = state.http.post_json(&request.discord_webhook, body).await?;
    match response.status {
        200 | 204 => Ok(response.body),
        status => Err(RelayError::Upstream {
            status,
            body: response.body,
        }),
    }
}

async fn webhook_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let request = match NotificationRequest::from_json(&body, &state.request_fields) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejected webhook request: {}", e);
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    tracing::debug!(
        "Received '{}' ({} bytes, severity {})",
        request.title,
        request.message_content.len(),
        request.severity
    );

    match relay(&state, &request).await {
        Ok(body) => {
            tracing::info!("Relayed '{}' to Discord", request.title);
            (StatusCode::OK, body).into_response()
        }
        Err(RelayError::Upstream { status, body }) => {
            tracing::warn!("Discord webhook rejected '{}': {}", request.title, status);
            (StatusCode::BAD_REQUEST, body).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to send Discord webhook: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

async fn count_handler(State(state): State<AppState>) -> Response {
    match count_entries(&state.logs_dir).await {
        Ok(count) => {
            tracing::debug!("Retrieved {} files for status check", count);
            (StatusCode::OK, format!("logs: {}", count)).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to read logs directory: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

async fn count_entries(dir: &std::path::Path) -> Result<usize> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut count = 0;
    while entries.next_entry().await?.is_some() {
        count += 1;
    }
    Ok(count)
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
