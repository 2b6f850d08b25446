//! # HTTP Server
//!
//! Binds the lookup routes to a socket and serves them.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ServiceConfig;
use crate::observability::Logger;
use crate::table::Table;

use super::truck_routes::{truck_routes, AppState};

/// HTTP server for the food-truck lookup service
pub struct HttpServer {
    config: ServiceConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server with default configuration
    pub fn new(table: Arc<Table>) -> Self {
        Self::with_config(ServiceConfig::default(), table)
    }

    /// Create a server with custom configuration
    pub fn with_config(config: ServiceConfig, table: Arc<Table>) -> Self {
        let router = Self::build_router(table);
        Self { config, router }
    }

    /// Build the router with all endpoints
    fn build_router(table: Arc<Table>) -> Router {
        let state = Arc::new(AppState::new(table));

        // Browser clients may call the lookup from any origin
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new().merge(truck_routes(state)).layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    ///
    /// Runs until the process is terminated.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        let listener = TcpListener::bind(&addr).await?;
        Logger::info("SERVER_LISTENING", &[("addr", &addr)]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}
