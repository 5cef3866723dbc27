// HTTP request handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use super::AppServer;
use crate::chat::{ChatError, ChatRequest, ChatResponse, APOLOGY_MESSAGE, MESSAGE_REQUIRED};
use crate::resources::{catalog, ResourceCatalog};

/// Create the main application router
pub fn create_router(server: Arc<AppServer>) -> Router {
    Router::new()
        .route("/chat", post(handle_chat))
        .route("/resources", get(get_resources))
        .route("/health", get(health_check))
        .with_state(server)
}

/// Handle POST /chat - Screen the message, then relay it
async fn handle_chat(
    State(server): State<Arc<AppServer>>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ChatError> {
    let request_id = uuid::Uuid::new_v4();

    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(%request_id, error = %rejection, "Unreadable chat body");
            return Err(ChatError::MessageRequired);
        }
    };

    let response = server.chat().handle(request.text()).await?;

    tracing::info!(%request_id, is_crisis = response.is_crisis, "Chat handled");

    Ok(Json(response))
}

/// Handle GET /resources - Static resource catalog
async fn get_resources() -> Json<&'static ResourceCatalog> {
    Json(catalog())
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<AppServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "auramind",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: server.uptime_seconds(),
    })
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        match self {
            ChatError::MessageRequired => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": MESSAGE_REQUIRED })),
            )
                .into_response(),
            // Provider detail was logged by the chat service and stays server-side
            ChatError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": APOLOGY_MESSAGE,
                    "is_crisis": false
                })),
            )
                .into_response(),
        }
    }
}
