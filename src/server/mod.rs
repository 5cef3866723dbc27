// AuraMind HTTP server
// Chat relay and resource catalog endpoints

mod handlers;

pub use handlers::{create_router, health_check, HealthStatus};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::chat::ChatService;

/// Shared, read-only state for all request handlers
pub struct AppServer {
    chat: ChatService,
    started_at: Instant,
}

impl AppServer {
    pub fn new(chat: ChatService) -> Self {
        Self {
            chat,
            started_at: Instant::now(),
        }
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Full application: routes plus CORS and request tracing
    pub fn into_app(self) -> axum::Router {
        create_router(Arc::new(self))
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    /// Start the HTTP server
    pub async fn serve(self, bind_address: &str) -> Result<()> {
        let addr: SocketAddr = bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind_address))?;

        let app = self.into_app();

        tracing::info!("Starting AuraMind server on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
