//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, http::Method, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use nbp_types::RateFeed;

use super::handlers::{self, AppState};
use crate::QueryService;

/// HTTP Server for the rates API.
pub struct HttpServer<F: RateFeed> {
    state: Arc<AppState<F>>,
}

impl<F: RateFeed> HttpServer<F> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: QueryService<F>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET]);

        Router::new()
            .route("/health", get(handlers::health))
            .route("/api-docs/openapi.json", get(handlers::openapi))
            .route("/{date}/{table}/{codes}", get(handlers::rates::<F>))
            .fallback(handlers::not_found)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
