//! Observability for the timeseries service
//!
//! Structured JSON logging with a process-wide severity filter.
//!
//! ```ignore
//! use timeseries_api::observability::{Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Debug);
//! Logger::debug("TIMESERIES_FIND", &[("symbol", "AAPL")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
