//! # HTTP Server
//!
//! Combines the health and lead routers into one Axum app. The same
//! router serves both deployment targets; only the CORS treatment differs.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event};
use crate::store::{LeadStore, MemoryLeadStore};

use super::config::{DeploymentTarget, ServerConfig};
use super::lead_routes::{lead_routes, LeadState};
use super::observability_routes::health_routes;

/// HTTP server for the lead service
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration and an empty store
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a server with custom configuration and an empty store
    pub fn with_config(config: ServerConfig) -> Self {
        Self::with_store(config, Arc::new(MemoryLeadStore::new()))
    }

    /// Create a server backed by the given store
    pub fn with_store(config: ServerConfig, store: Arc<dyn LeadStore>) -> Self {
        let router = build_router(&config, store);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process is stopped
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let addr_str = addr.to_string();
        log_event_with_fields(
            Event::ServerStart,
            &[
                ("addr", addr_str.as_str()),
                ("deployment", self.config.deployment.as_str()),
            ],
        );

        let listener = TcpListener::bind(addr).await?;
        log_event_with_fields(Event::ServerListening, &[("addr", addr_str.as_str())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the combined router
pub fn build_router(config: &ServerConfig, store: Arc<dyn LeadStore>) -> Router {
    let state = Arc::new(LeadState::new(store));

    let router = Router::new()
        .merge(health_routes(state.clone()))
        .nest("/api", lead_routes(state, config.deployment));

    match config.deployment {
        DeploymentTarget::Standalone => router.layer(cors_layer(config)),
        // Lead routes set their own CORS headers
        DeploymentTarget::Serverless => router,
    }
}

/// CORS for the standalone target
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    if config.cors_origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}
