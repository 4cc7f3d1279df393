//! # HTTP Server Module
//!
//! Axum server exposing the tick repository over REST.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/v1/timeseries/` - All records
//! - `/api/v1/timeseries/:symbol` - Records for one symbol
//! - `/api-docs/openapi.json` - OpenAPI document

pub mod api_docs_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;
pub mod timeseries_routes;

pub use api_docs_routes::OPENAPI_PATH;
pub use config::HttpServerConfig;
pub use errors::{TimeseriesError, TimeseriesResult};
pub use server::HttpServer;
pub use timeseries_routes::{
    TimeseriesApiDoc, TimeseriesState, FIXED_LOOKUP_DAY, TIMESERIES_PATH,
};
