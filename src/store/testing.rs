/// In-memory fake store for unit tests.
///
/// Mirrors the SQL semantics of the PostgreSQL adapter row for row: date
/// queries sort ascending, the signature lookup is a trailing-substring
/// match on the stored date text, and rows with absent `prcp`/`tobs` are
/// excluded from the respective projections.

use async_trait::async_trait;

use crate::model::{PrecipitationReading, QueryError, StationRecord, TemperatureReading};
use crate::store::ClimateStore;

/// One fake `measurements` row. Station identity never influences the
/// queries the gateway exposes, so the fake omits it.
#[derive(Debug, Clone)]
pub struct FakeMeasurement {
    pub date: String,
    pub prcp: Option<f64>,
    pub tobs: Option<f64>,
}

#[derive(Debug, Default)]
pub struct FakeStore {
    pub measurements: Vec<FakeMeasurement>,
    pub stations: Vec<StationRecord>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a measurement row with a temperature observation only.
    pub fn with_tobs(mut self, date: &str, tobs: f64) -> Self {
        self.measurements.push(FakeMeasurement {
            date: date.to_string(),
            prcp: None,
            tobs: Some(tobs),
        });
        self
    }

    /// Adds a full measurement row.
    pub fn with_row(mut self, date: &str, prcp: Option<f64>, tobs: Option<f64>) -> Self {
        self.measurements.push(FakeMeasurement {
            date: date.to_string(),
            prcp,
            tobs,
        });
        self
    }

    pub fn with_station(mut self, station: StationRecord) -> Self {
        self.stations.push(station);
        self
    }
}

#[async_trait]
impl ClimateStore for FakeStore {
    async fn dates_from(&self, start: &str) -> Result<Vec<String>, QueryError> {
        let mut dates: Vec<String> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= start)
            .map(|m| m.date.clone())
            .collect();
        dates.sort();
        Ok(dates)
    }

    async fn dates_between(&self, start: &str, end: &str) -> Result<Vec<String>, QueryError> {
        let mut dates: Vec<String> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= start && m.date.as_str() <= end)
            .map(|m| m.date.clone())
            .collect();
        dates.sort();
        Ok(dates)
    }

    async fn temperatures_by_signature(&self, signature: &str) -> Result<Vec<f64>, QueryError> {
        Ok(self
            .measurements
            .iter()
            .filter(|m| m.date.ends_with(signature))
            .filter_map(|m| m.tobs)
            .collect())
    }

    async fn earliest_date(&self) -> Result<Option<String>, QueryError> {
        Ok(self.measurements.iter().map(|m| m.date.clone()).min())
    }

    async fn latest_date(&self) -> Result<Option<String>, QueryError> {
        Ok(self.measurements.iter().map(|m| m.date.clone()).max())
    }

    async fn precipitation_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<PrecipitationReading>, QueryError> {
        let mut readings: Vec<PrecipitationReading> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= threshold)
            .filter_map(|m| {
                m.prcp.map(|prcp| PrecipitationReading {
                    date: m.date.clone(),
                    prcp,
                })
            })
            .collect();
        readings.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<StationRecord>, QueryError> {
        Ok(self.stations.clone())
    }

    async fn temperatures_since(
        &self,
        threshold: &str,
    ) -> Result<Vec<TemperatureReading>, QueryError> {
        let mut readings: Vec<TemperatureReading> = self
            .measurements
            .iter()
            .filter(|m| m.date.as_str() >= threshold)
            .filter_map(|m| {
                m.tobs.map(|tobs| TemperatureReading {
                    date: m.date.clone(),
                    tobs,
                })
            })
            .collect();
        readings.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_mirrors_sql_null_exclusion_and_ordering() {
        let store = FakeStore::new()
            .with_row("2017-01-02", None, Some(66.0))
            .with_row("2017-01-01", Some(0.12), Some(70.0))
            .with_row("2017-01-03", Some(0.30), None);

        let prcp = store.precipitation_since("2017-01-01").await.unwrap();
        let dates: Vec<&str> = prcp.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2017-01-01", "2017-01-03"], "NULL prcp rows skipped");

        let tobs = store.temperatures_since("2017-01-01").await.unwrap();
        let dates: Vec<&str> = tobs.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, ["2017-01-01", "2017-01-02"], "NULL tobs rows skipped");

        let all = store.dates_from("2017-01-01").await.unwrap();
        assert_eq!(all, ["2017-01-01", "2017-01-02", "2017-01-03"]);
    }

    #[tokio::test]
    async fn test_fake_serves_station_rows_verbatim() {
        let store = FakeStore::new().with_station(StationRecord {
            station: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        });

        let stations = store.stations().await.unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].station, "USC00519397");
    }
}
