//! # Timeseries API Errors
//!
//! HTTP-facing error type. Bodies are plain text.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type for timeseries handlers
pub type TimeseriesResult<T> = Result<T, TimeseriesError>;

/// Errors surfaced by the timeseries routes
#[derive(Debug, Clone, Error)]
pub enum TimeseriesError {
    /// Caller input rejected
    #[error("Invalid Parameter: {0}")]
    InvalidArgument(String),

    /// Store could not answer
    #[error("{0}")]
    StoreUnavailable(String),
}

impl TimeseriesError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            TimeseriesError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            TimeseriesError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RepositoryError> for TimeseriesError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::InvalidArgument(msg) => TimeseriesError::InvalidArgument(msg),
            RepositoryError::Unavailable(msg) => TimeseriesError::StoreUnavailable(msg),
        }
    }
}

impl IntoResponse for TimeseriesError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}
