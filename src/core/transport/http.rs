//! HTTP transport implementation.
//!
//! Serves the villa controller plus root and health endpoints with axum.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::{TransportConfig, TransportError, TransportResult};
use crate::core::VillaServer;
use crate::domains::villas::{self, BASE_PATH};

/// HTTP transport handler.
pub struct HttpTransport {
    config: TransportConfig,
}

/// Application state shared across the server-level handlers.
#[derive(Clone)]
struct AppState {
    server: VillaServer,
}

/// Build the full application router for `server`.
pub fn build_router(server: VillaServer, enable_cors: bool) -> Router {
    let state = AppState {
        server: server.clone(),
    };

    let mut app = Router::new()
        .route("/health", get(health_check))
        .route("/", get(root_handler))
        .with_state(state)
        .merge(villas::router(server.villas().clone()))
        .layer(TraceLayer::new_for_http());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        self.config.address()
    }

    /// Run the HTTP transport until the server stops.
    pub async fn run(self, server: VillaServer) -> TransportResult<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Villas: {}", BASE_PATH);
        info!("  → Health: GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": state.server.name(),
        "version": state.server.version(),
        "transport": "HTTP",
        "endpoints": {
            "villas": BASE_PATH,
            "health": "/health"
        }
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
