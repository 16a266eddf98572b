//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, limits, request ID)
//! - Bind server to listener
//! - Stop accepting and drain when shutdown fires

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{KvConfig, LimitsConfig};
use crate::http::{handlers, middleware::track_requests};
use crate::lifecycle::ShutdownListener;
use crate::store::Store;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

/// Build the Axum router with all middleware layers.
#[allow(deprecated)]
pub fn build_router(limits: &LimitsConfig, state: AppState) -> Router {
    Router::new()
        .route(
            "/data",
            post(handlers::put_data)
                .get(handlers::get_data)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/data/",
            delete(handlers::delete_empty_key).fallback(handlers::method_not_allowed),
        )
        .route(
            "/data/{*key}",
            delete(handlers::delete_data).fallback(handlers::method_not_allowed),
        )
        .route(
            "/stats",
            get(handlers::get_stats)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .with_state(state)
        .layer(DefaultBodyLimit::max(limits.max_body_size))
        .layer(TimeoutLayer::new(Duration::from_secs(limits.request_timeout_secs)))
        .layer(middleware::from_fn(track_requests))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
}

/// HTTP front end for a [`Store`].
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving `store`.
    pub fn new(config: &KvConfig, store: Arc<Store>) -> Self {
        let router = build_router(&config.limits, AppState { store });
        Self { router }
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.recv().await;
                tracing::debug!("HTTP server no longer accepting connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
