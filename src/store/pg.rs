/// PostgreSQL adapter for the climate store.
///
/// Holds one explicitly constructed client whose connection task is spawned
/// at startup and lives for the process lifetime. The schema is declared
/// statically below — no runtime reflection. Measurement dates are ISO
/// `YYYY-MM-DD` text columns, so `>=`, `BETWEEN`, and `ORDER BY` on them
/// are chronological, and the day-of-year lookup is a trailing-substring
/// match on the stored text.

use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};

use crate::logging::{self, DataSource};
use crate::model::{PrecipitationReading, QueryError, StationRecord, TemperatureReading};
use crate::store::ClimateStore;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Statically declared DDL for the two tables the service reads.
/// `prcp` and `tobs` are nullable: stations do not report every field every
/// day, and absent values are excluded from query results rather than
/// coerced to zero.
pub const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS measurements (
        id      BIGSERIAL PRIMARY KEY,
        station TEXT NOT NULL,
        date    TEXT NOT NULL,
        prcp    DOUBLE PRECISION,
        tobs    DOUBLE PRECISION
    );
    CREATE INDEX IF NOT EXISTS measurements_date_idx ON measurements (date);

    CREATE TABLE IF NOT EXISTS stations (
        station   TEXT PRIMARY KEY,
        name      TEXT NOT NULL,
        latitude  DOUBLE PRECISION NOT NULL,
        longitude DOUBLE PRECISION NOT NULL,
        elevation DOUBLE PRECISION NOT NULL
    );
";

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

pub struct PgStore {
    client: Client,
}

impl PgStore {
    /// Connects to PostgreSQL and spawns the connection driver task.
    ///
    /// The task runs until the process exits or the connection drops; a
    /// dropped connection is logged and subsequent queries surface as
    /// `QueryError::Store`.
    pub async fn connect(database_url: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, connection) = tokio_postgres::connect(database_url, NoTls).await?;
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                logging::error(DataSource::Db, None, &format!("connection lost: {}", e));
            }
        });
        Ok(Self { client })
    }

    /// Wraps an already-connected client. Used by integration tests that
    /// manage their own connection.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Creates the `measurements` and `stations` tables if absent.
    /// Bootstrap/test convenience only — not part of the read gateway.
    pub async fn init_schema(&self) -> Result<(), tokio_postgres::Error> {
        self.client.batch_execute(SCHEMA).await
    }
}

#[async_trait]
impl ClimateStore for PgStore {
    async fn dates_from(&self, start: &str) -> Result<Vec<String>, QueryError> {
        let rows = self
            .client
            .query(
                "SELECT date FROM measurements WHERE date >= $1 ORDER BY date",
                &[&start],
            )
            .await?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn dates_between(&self, start: &str, end: &str) -> Result<Vec<String>, QueryError> {
        let rows = self
            .client
            .query(
                "SELECT date FROM measurements WHERE date BETWEEN $1 AND $2 ORDER BY date",
                &[&start, &end],
            )
            .await?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn temperatures_by_signature(&self, signature: &str) -> Result<Vec<f64>, QueryError> {
        // Trailing-substring match: any stored date ending in "MM-DD"
        // contributes, whatever its year.
        let rows = self
            .client
            .query(
                "SELECT tobs FROM measurements
                 WHERE tobs IS NOT NULL AND date LIKE '%' || $1",
                &[&signature],
            )
            .await?;
        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    async fn earliest_date(&self) -> Result<Option<String>, QueryError> {
        let row = self
            .client
            .query_opt("SELECT date FROM measurements ORDER BY date LIMIT 1", &[])
            .await?;
        Ok(row.map(|r| r.get(0)))
    }

    async fn latest_date(&self) -> Result<Option<String>, QueryError> {
        let row = self
            .client
            .query_opt(
                "SELECT date FROM measurements ORDER BY date DESC LIMIT 1",
                &[],
            )
            .await?;
        Ok(row.map(|r| r.get(0)))
    }

    async fn precipitation_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<PrecipitationReading>, QueryError> {
        let rows = self
            .client
            .query(
                "SELECT date, prcp FROM measurements
                 WHERE date >= $1 AND prcp IS NOT NULL
                 ORDER BY date",
                &[&threshold],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| PrecipitationReading {
                date: row.get(0),
                prcp: row.get(1),
            })
            .collect())
    }

    async fn stations(&self) -> Result<Vec<StationRecord>, QueryError> {
        let rows = self
            .client
            .query(
                "SELECT station, name, latitude, longitude, elevation FROM stations",
                &[],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| StationRecord {
                station: row.get(0),
                name: row.get(1),
                latitude: row.get(2),
                longitude: row.get(3),
                elevation: row.get(4),
            })
            .collect())
    }

    async fn temperatures_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<TemperatureReading>, QueryError> {
        let rows = self
            .client
            .query(
                "SELECT date, tobs FROM measurements
                 WHERE date >= $1 AND tobs IS NOT NULL
                 ORDER BY date",
                &[&threshold],
            )
            .await?;
        Ok(rows
            .iter()
            .map(|row| TemperatureReading {
                date: row.get(0),
                tobs: row.get(1),
            })
            .collect())
    }
}
