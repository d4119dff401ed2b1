//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::time::Duration;

use axum::Router;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::{Config, ServerState};

/// HTTP Server
pub struct Server {
    config: Config,
    state: Option<ServerState>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Create server with existing state (for sharing with tests)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self {
            config,
            state: Some(state),
        }
    }

    /// Assemble the full application router for a state
    ///
    /// Split out of `run` so in-process tests can drive the router
    /// without binding a socket.
    pub fn build_router(state: ServerState) -> Router {
        let cors = match state.config.cors_origin.parse::<HeaderValue>() {
            Ok(origin) => CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any),
            Err(_) => {
                tracing::warn!(
                    origin = %state.config.cors_origin,
                    "Invalid CORS_ORIGIN, falling back to allow-any"
                );
                CorsLayer::permissive()
            }
        };
        let timeout = TimeoutLayer::new(Duration::from_millis(state.config.request_timeout_ms));

        Router::new()
            .merge(api::health::router())
            .merge(api::restaurants::router())
            .merge(api::meals::router())
            .merge(api::reservations::router())
            .merge(api::metrics::router())
            .layer(TraceLayer::new_for_http())
            .layer(timeout)
            .layer(cors)
            .with_state(state)
    }

    pub async fn run(&self) -> anyhow::Result<()> {
        // Create application state if not provided
        let state = match &self.state {
            Some(s) => s.clone(),
            None => ServerState::initialize(&self.config).await,
        };

        let app = Self::build_router(state);

        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        tracing::info!("🍽️ Moliceiro Meal Server starting on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
