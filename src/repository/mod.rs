//! # Tick Repository
//!
//! Read-only facade over the store holding daily tick records.
//!
//! Callers depend on [`TimeseriesRepository`] only. Concrete stores:
//! - [`InMemoryRepository`] - seeded vector, used by tests and empty boots
//! - [`JsonFileRepository`] - stateless read-through over a JSON file

mod errors;
mod json_file;
mod memory;
mod record;

pub use errors::{RepositoryError, RepositoryResult};
pub use json_file::JsonFileRepository;
pub use memory::InMemoryRepository;
pub use record::{parse_day, TickRecord};

use async_trait::async_trait;

/// Read access to stored tick records.
///
/// Implementations may block on I/O to the backing store. They never retry.
#[async_trait]
pub trait TimeseriesRepository: Send + Sync {
    /// Every stored record, in store-defined order. No paging is applied.
    async fn list_all(&self) -> RepositoryResult<Vec<TickRecord>>;

    /// Records whose key equals `(source, day)` exactly.
    ///
    /// An empty vector means no match, not an error.
    async fn find_by_source_and_day(
        &self,
        source: &str,
        day: &str,
    ) -> RepositoryResult<Vec<TickRecord>>;
}
