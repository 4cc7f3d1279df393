//! API documentation route
//!
//! Serves the OpenAPI document at `/api-docs/openapi.json`.

use axum::{routing::get, Json, Router};
use utoipa::openapi::OpenApi as OpenApiDocument;
use utoipa::OpenApi;

use super::timeseries_routes::TimeseriesApiDoc;

/// Path of the OpenAPI document
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI route
pub fn api_docs_routes() -> Router {
    Router::new().route(OPENAPI_PATH, get(openapi_handler))
}

async fn openapi_handler() -> Json<OpenApiDocument> {
    Json(TimeseriesApiDoc::openapi())
}
