//! timeseries-api - REST service for daily time-series tick records
//!
//! Records are keyed by `(source, day)` with `day` in `YYYYMMDD` form and are
//! read through the [`repository::TimeseriesRepository`] facade.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod repository;
