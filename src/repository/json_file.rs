//! File-backed tick store
//!
//! Treats a JSON array file as the external store: every call reads the file
//! afresh, so the repository keeps no state of its own between calls.

use std::path::PathBuf;

use async_trait::async_trait;

use super::errors::{RepositoryError, RepositoryResult};
use super::record::TickRecord;
use super::TimeseriesRepository;

/// Read-through repository over a JSON array of [`TickRecord`]
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn load(&self) -> RepositoryResult<Vec<TickRecord>> {
        let content = tokio::fs::read(&self.path).await.map_err(|e| {
            RepositoryError::Unavailable(format!(
                "Cannot read store '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(serde_json::from_slice(&content)?)
    }
}

#[async_trait]
impl TimeseriesRepository for JsonFileRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<TickRecord>> {
        self.load().await
    }

    async fn find_by_source_and_day(
        &self,
        source: &str,
        day: &str,
    ) -> RepositoryResult<Vec<TickRecord>> {
        let mut records = self.load().await?;
        records.retain(|r| r.matches(source, day));
        Ok(records)
    }
}
