//! Timeseries HTTP Routes
//!
//! Read endpoints over the tick repository:
//!
//! - `GET /api/v1/timeseries/` - every stored record
//! - `GET /api/v1/timeseries/:symbol` - records for a symbol on the lookup day

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::observability::Logger;
use crate::repository::{TickRecord, TimeseriesRepository};

use super::errors::TimeseriesResult;

/// Base path of the route group
pub const TIMESERIES_PATH: &str = "/api/v1/timeseries";

/// Day used by the symbol lookup.
///
/// The symbol route does not take a day from the request; it always queries
/// this partition.
pub const FIXED_LOOKUP_DAY: &str = "20200520";

/// OpenAPI description of the timeseries routes
#[derive(OpenApi)]
#[openapi(
    paths(find_all_handler, find_by_symbol_handler),
    components(schemas(TickRecord)),
    tags((name = "Timeseries", description = "Save ticks and search by source and day (yyyymmdd)"))
)]
pub struct TimeseriesApiDoc;

/// Timeseries state shared across handlers
#[derive(Clone)]
pub struct TimeseriesState {
    pub repository: Arc<dyn TimeseriesRepository>,
}

impl TimeseriesState {
    pub fn new(repository: Arc<dyn TimeseriesRepository>) -> Self {
        Self { repository }
    }
}

/// Create timeseries routes
pub fn timeseries_routes(state: TimeseriesState) -> Router {
    Router::new()
        .route(TIMESERIES_PATH, get(find_all_handler))
        .route("/api/v1/timeseries/", get(find_all_handler))
        .route("/api/v1/timeseries/:symbol", get(find_by_symbol_handler))
        .with_state(state)
}

fn lookup_fields(symbol: &str) -> [(&str, &str); 2] {
    [("symbol", symbol), ("day", FIXED_LOOKUP_DAY)]
}

/// Retrieve all values from the table. No paging is applied.
#[utoipa::path(
    get,
    path = "/api/v1/timeseries/",
    tag = "Timeseries",
    responses(
        (status = 200, description = "successful operation", body = Vec<TickRecord>),
        (status = 500, description = "store failure, body is the store message", body = String)
    )
)]
async fn find_all_handler(
    State(state): State<TimeseriesState>,
) -> TimeseriesResult<Json<Vec<TickRecord>>> {
    Logger::debug("TIMESERIES_LIST_ALL", &[]);

    let records = state.repository.list_all().await?;
    Ok(Json(records))
}

/// Retrieve the ticks of a symbol on the lookup day
#[utoipa::path(
    get,
    path = "/api/v1/timeseries/{symbol}",
    tag = "Timeseries",
    params(("symbol" = String, Path, description = "series identifier, e.g. a ticker")),
    responses(
        (status = 200, description = "matching records, possibly none", body = Vec<TickRecord>),
        (status = 400, description = "Invalid Parameter: <reason>", body = String),
        (status = 500, description = "store failure, body is the store message", body = String)
    )
)]
async fn find_by_symbol_handler(
    State(state): State<TimeseriesState>,
    Path(symbol): Path<String>,
) -> TimeseriesResult<Json<Vec<TickRecord>>> {
    Logger::debug("TIMESERIES_FIND_BY_SYMBOL", &lookup_fields(&symbol));

    let records = state
        .repository
        .find_by_source_and_day(&symbol, FIXED_LOOKUP_DAY)
        .await?;
    Ok(Json(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observability::Severity;
    use crate::repository::InMemoryRepository;

    #[test]
    fn test_router_builds() {
        let state = TimeseriesState::new(Arc::new(InMemoryRepository::new()));
        let _router = timeseries_routes(state);
    }

    #[test]
    fn test_fixed_lookup_day_is_a_day_key() {
        assert!(crate::repository::parse_day(FIXED_LOOKUP_DAY).is_ok());
    }

    #[test]
    fn test_lookup_event_carries_symbol_and_day() {
        let mut out = Vec::new();
        Logger::write_event(
            Severity::Debug,
            Severity::Debug,
            "TIMESERIES_FIND_BY_SYMBOL",
            &lookup_fields("AAPL"),
            &mut out,
        );

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed["severity"], "DEBUG");
        assert_eq!(parsed["symbol"], "AAPL");
        assert_eq!(parsed["day"], FIXED_LOOKUP_DAY);
    }

    #[test]
    fn test_api_doc_lists_both_routes() {
        let doc = serde_json::to_value(TimeseriesApiDoc::openapi()).unwrap();
        assert!(doc["paths"]["/api/v1/timeseries/"]["get"].is_object());
        assert!(doc["paths"]["/api/v1/timeseries/{symbol}"]["get"].is_object());
        assert!(doc["components"]["schemas"]["TickRecord"].is_object());
    }
}
