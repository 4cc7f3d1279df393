//! In-memory tick store
//!
//! Holds a seeded set of records. Enforces the `YYYYMMDD` day key format the
//! way the backing table would.

use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{RepositoryError, RepositoryResult};
use super::record::{parse_day, TickRecord};
use super::TimeseriesRepository;

/// In-memory implementation of [`TimeseriesRepository`]
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    records: RwLock<Vec<TickRecord>>,
}

impl InMemoryRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with records, in insertion order
    pub fn with_records(records: Vec<TickRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    fn snapshot(&self) -> RepositoryResult<std::sync::RwLockReadGuard<'_, Vec<TickRecord>>> {
        self.records
            .read()
            .map_err(|_| RepositoryError::Unavailable("In-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl TimeseriesRepository for InMemoryRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<TickRecord>> {
        Ok(self.snapshot()?.clone())
    }

    async fn find_by_source_and_day(
        &self,
        source: &str,
        day: &str,
    ) -> RepositoryResult<Vec<TickRecord>> {
        parse_day(day)?;

        Ok(self
            .snapshot()?
            .iter()
            .filter(|r| r.matches(source, day))
            .cloned()
            .collect())
    }
}
