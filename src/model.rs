/// Core data types for the climate normals service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond serde —
/// only types.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Response row types
// ---------------------------------------------------------------------------

/// One precipitation reading, projected straight out of the `measurements`
/// table. Rows with no recorded precipitation are excluded at the store, so
/// `prcp` is always present here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipitationReading {
    pub date: String, // ISO 8601 calendar date, e.g. "2017-01-01"
    pub prcp: f64,
}

/// One temperature observation, projected straight out of the
/// `measurements` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: f64,
}

/// Metadata for a single climate station, from the `stations` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationRecord {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

// ---------------------------------------------------------------------------
// Aggregation types
// ---------------------------------------------------------------------------

/// Historical min/avg/max temperature for one day-of-year, computed across
/// every year on record that shares the day's month-day signature.
///
/// Invariant: `tmin <= tavg <= tmax` (the contributing observation set is
/// never empty — an empty set is `QueryError::NoHistoricalData` instead).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyStats {
    pub tmin: f64,
    pub tavg: f64, // rounded to 1 decimal place
    pub tmax: f64,
}

/// A `DailyStats` paired with the calendar date it was computed for. One
/// entry per date in an aggregation request; built transiently per request
/// and discarded after serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyNormal {
    pub date: String,
    pub tmin: f64,
    pub tavg: f64,
    pub tmax: f64,
}

impl DailyNormal {
    pub fn new(date: String, stats: DailyStats) -> Self {
        Self {
            date,
            tmin: stats.tmin,
            tavg: stats.tavg,
            tmax: stats.tmax,
        }
    }
}

/// The earliest and latest measurement dates on record. Re-derived from
/// storage for every validation; never cached across requests.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBounds {
    pub earliest: String,
    pub latest: String,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Which edge of the recorded dataset a rejected date fell outside of.
#[derive(Debug)]
pub enum DatasetBound {
    /// Requested date is before this earliest recorded date.
    Earliest(String),
    /// Requested date is after this latest recorded date.
    Latest(String),
}

/// Errors that can arise while answering a normals query.
///
/// The first three variants are request-scoped and recoverable: they surface
/// to the caller as a 404 with a descriptive message and are never fatal to
/// the process. `Store` is an unexpected storage-layer failure and surfaces
/// as a 500 at the transport boundary.
#[derive(Debug)]
pub enum QueryError {
    /// The input string is not a strict `YYYY-MM-DD` date.
    InvalidDateFormat(String),
    /// The input parsed but falls outside the recorded dataset bounds.
    DateOutOfRange { input: String, bound: DatasetBound },
    /// No historical year contains an observation for this month-day
    /// signature (e.g. Feb 29 against a record with no leap years).
    NoHistoricalData(String),
    /// The storage collaborator failed.
    Store(tokio_postgres::Error),
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidDateFormat(input) => write!(
                f,
                "Invalid date format of '{}'. Format must be 'YYYY-MM-DD'.",
                input
            ),
            QueryError::DateOutOfRange { input, bound } => match bound {
                DatasetBound::Earliest(date) => write!(
                    f,
                    "Invalid date of '{}'. Earliest date is {}.",
                    input, date
                ),
                DatasetBound::Latest(date) => {
                    write!(f, "Invalid date of '{}'. Latest date is {}.", input, date)
                }
            },
            QueryError::NoHistoricalData(signature) => write!(
                f,
                "No historical temperature observations for day-of-year '{}'.",
                signature
            ),
            QueryError::Store(err) => write!(f, "Storage error: {}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<tokio_postgres::Error> for QueryError {
    fn from(err: tokio_postgres::Error) -> Self {
        QueryError::Store(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_message_matches_api_contract() {
        let err = QueryError::InvalidDateFormat("2017-1-1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid date format of '2017-1-1'. Format must be 'YYYY-MM-DD'."
        );
    }

    #[test]
    fn test_out_of_range_messages_cite_the_violated_bound() {
        let before = QueryError::DateOutOfRange {
            input: "2009-12-31".to_string(),
            bound: DatasetBound::Earliest("2010-01-01".to_string()),
        };
        assert_eq!(
            before.to_string(),
            "Invalid date of '2009-12-31'. Earliest date is 2010-01-01."
        );

        let after = QueryError::DateOutOfRange {
            input: "2018-01-01".to_string(),
            bound: DatasetBound::Latest("2017-08-23".to_string()),
        };
        assert_eq!(
            after.to_string(),
            "Invalid date of '2018-01-01'. Latest date is 2017-08-23."
        );
    }

    #[test]
    fn test_daily_normal_carries_stats_through() {
        let normal = DailyNormal::new(
            "2017-01-01".to_string(),
            DailyStats {
                tmin: 50.0,
                tavg: 60.0,
                tmax: 70.0,
            },
        );
        assert_eq!(normal.date, "2017-01-01");
        assert_eq!(normal.tmin, 50.0);
        assert_eq!(normal.tavg, 60.0);
        assert_eq!(normal.tmax, 70.0);
    }
}
