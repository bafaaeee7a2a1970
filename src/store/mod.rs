/// Read-only gateway to the measurement store.
///
/// The service consumes storage through the narrow `ClimateStore` trait —
/// eight read operations, no mutation. The production adapter (`pg`) speaks
/// to PostgreSQL; the aggregation core only ever sees the trait, so its
/// tests run against the in-memory fake in `testing`.

use async_trait::async_trait;

use crate::model::{PrecipitationReading, QueryError, StationRecord, TemperatureReading};

pub mod pg;

#[cfg(test)]
pub mod testing;

pub use pg::PgStore;

/// The narrow read interface over the `measurements` and `stations` tables.
///
/// Date arguments and results are ISO `YYYY-MM-DD` text; the store keeps
/// dates as text, so lexicographic comparison is chronological comparison.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// All measurement dates `>= start`, ascending. One entry per stored
    /// row — duplicates across stations are preserved.
    async fn dates_from(&self, start: &str) -> Result<Vec<String>, QueryError>;

    /// All measurement dates in `[start, end]` inclusive, ascending.
    async fn dates_between(&self, start: &str, end: &str) -> Result<Vec<String>, QueryError>;

    /// Every recorded temperature observation whose date string ends with
    /// the 5-character `MM-DD` signature, from any year. Unordered.
    async fn temperatures_by_signature(&self, signature: &str) -> Result<Vec<f64>, QueryError>;

    /// Earliest measurement date on record, or `None` if the table is empty.
    async fn earliest_date(&self) -> Result<Option<String>, QueryError>;

    /// Latest measurement date on record, or `None` if the table is empty.
    async fn latest_date(&self) -> Result<Option<String>, QueryError>;

    /// All precipitation readings with date `>= threshold`, ascending.
    /// Rows with no recorded precipitation are excluded.
    async fn precipitation_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<PrecipitationReading>, QueryError>;

    /// Every station on record.
    async fn stations(&self) -> Result<Vec<StationRecord>, QueryError>;

    /// All temperature observations with date `>= threshold`, ascending.
    /// Rows with no recorded observation are excluded.
    async fn temperatures_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<TemperatureReading>, QueryError>;
}
