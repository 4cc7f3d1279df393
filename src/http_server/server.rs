//! # HTTP Server
//!
//! Combines the timeseries, health and API docs routers behind one CORS
//! layer.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::repository::TimeseriesRepository;

use super::api_docs_routes::api_docs_routes;
use super::config::HttpServerConfig;
use super::health_routes::health_routes;
use super::timeseries_routes::{timeseries_routes, TimeseriesState, TIMESERIES_PATH};

/// HTTP server for the timeseries API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given repository
    pub fn new(config: HttpServerConfig, repository: Arc<dyn TimeseriesRepository>) -> Self {
        let router = Self::build_router(&config, repository);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig, repository: Arc<dyn TimeseriesRepository>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<HeaderValue> = config
                .cors_origins
                .iter()
                .filter_map(|s| match HeaderValue::from_str(s) {
                    Ok(origin) => Some(origin),
                    Err(_) => {
                        Logger::warn("CORS_ORIGIN_IGNORED", &[("origin", s.as_str())]);
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(api_docs_routes())
            .merge(timeseries_routes(TimeseriesState::new(repository)))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the listener fails
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        Logger::info(
            "HTTP_SERVER_LISTENING",
            &[("addr", bound.as_str()), ("base_path", TIMESERIES_PATH)],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    fn empty_repo() -> Arc<dyn TimeseriesRepository> {
        Arc::new(InMemoryRepository::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), empty_repo());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(9090), empty_repo());
        assert_eq!(server.socket_addr(), "0.0.0.0:9090");
    }

    #[test]
    fn test_router_builds_with_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, empty_repo()).router();
    }

    #[tokio::test]
    async fn test_start_rejects_bad_host() {
        let config = HttpServerConfig {
            host: "not a host".to_string(),
            ..Default::default()
        };
        let err = HttpServer::new(config, empty_repo()).start().await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
