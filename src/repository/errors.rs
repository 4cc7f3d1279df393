//! Repository error types
//!
//! Stores report two kinds of failure: a caller argument they refuse, and
//! anything that keeps the store from answering.

use thiserror::Error;

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RepositoryError {
    /// Argument rejected by the store
    #[error("{0}")]
    InvalidArgument(String),

    /// Store could not be reached or answered with a protocol-level error
    #[error("{0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Unavailable(format!("Malformed store response: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_bare_message() {
        let err = RepositoryError::Unavailable("All host(s) tried for query failed".into());
        assert_eq!(err.to_string(), "All host(s) tried for query failed");
    }

    #[test]
    fn test_json_error_is_unavailable() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = RepositoryError::from(json_err);
        assert!(matches!(err, RepositoryError::Unavailable(ref m) if m.starts_with("Malformed")));
    }
}
