//! Tick record type and day key parsing
//!
//! A record lives in the partition `(source, day)` and is clustered by its
//! tick timestamp inside that partition.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::errors::{RepositoryError, RepositoryResult};

/// One daily aggregated tick for a given source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TickRecord {
    /// Series identifier, e.g. a ticker symbol
    #[schema(example = "AAPL")]
    pub source: String,

    /// Partition day in `YYYYMMDD` form
    #[schema(example = "20200520")]
    pub day: String,

    /// Timestamp of the measurement within the day
    pub tick: DateTime<Utc>,

    /// Measured value
    pub value: f64,
}

impl TickRecord {
    /// Create a new record
    pub fn new(
        source: impl Into<String>,
        day: impl Into<String>,
        tick: DateTime<Utc>,
        value: f64,
    ) -> Self {
        Self {
            source: source.into(),
            day: day.into(),
            tick,
            value,
        }
    }

    /// True when the record belongs to the `(source, day)` partition
    pub fn matches(&self, source: &str, day: &str) -> bool {
        self.source == source && self.day == day
    }
}

/// Length of the textual `YYYYMMDD` form
const DAY_KEY_LEN: usize = 8;

/// Parse an 8-digit `YYYYMMDD` day key.
///
/// Rejects anything that is not exactly eight ASCII digits or that does not
/// name a real calendar date.
pub fn parse_day(day: &str) -> RepositoryResult<NaiveDate> {
    if day.len() != DAY_KEY_LEN || !day.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RepositoryError::InvalidArgument(format!(
            "day '{}' must be 8 digits in YYYYMMDD form",
            day
        )));
    }

    NaiveDate::parse_from_str(day, "%Y%m%d").map_err(|_| {
        RepositoryError::InvalidArgument(format!("day '{}' is not a valid calendar date", day))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_serialization() {
        let tick = Utc.with_ymd_and_hms(2020, 5, 20, 14, 30, 0).unwrap();
        let record = TickRecord::new("AAPL", "20200520", tick, 318.89);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["source"], "AAPL");
        assert_eq!(json["day"], "20200520");
        assert_eq!(json["value"], 318.89);
        assert_eq!(json["tick"], "2020-05-20T14:30:00Z");
    }

    #[test]
    fn test_record_matches_partition() {
        let tick = Utc.with_ymd_and_hms(2020, 5, 20, 0, 0, 0).unwrap();
        let record = TickRecord::new("MSFT", "20200520", tick, 1.0);

        assert!(record.matches("MSFT", "20200520"));
        assert!(!record.matches("MSFT", "20200521"));
        assert!(!record.matches("msft", "20200520"));
    }

    #[test]
    fn test_parse_day() {
        let date = parse_day("20200520").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 5, 20).unwrap());
    }

    #[test]
    fn test_parse_day_rejects_bad_format() {
        for bad in ["", "2020052", "202005201", "2020-05-2", "2020052a", "２0200520"] {
            let err = parse_day(bad).unwrap_err();
            assert!(matches!(err, RepositoryError::InvalidArgument(_)), "{bad}");
        }
    }

    #[test]
    fn test_parse_day_rejects_impossible_date() {
        assert!(parse_day("20200230").is_err());
        assert!(parse_day("20201301").is_err());
        assert!(parse_day("20200229").is_ok());
    }
}
