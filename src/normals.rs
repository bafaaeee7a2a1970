/// Historical daily-normal computation.
///
/// Given a month-day signature, pull every temperature observation sharing
/// that signature from any year on record and reduce the set to min, mean,
/// and max. The mean is rounded to one decimal with `f64::round` semantics
/// (half away from zero).

use crate::model::{DailyStats, QueryError};
use crate::store::ClimateStore;

/// Reduces a non-empty observation set to {min, mean@1dp, max}.
/// Returns `None` for an empty set — an empty set has no minimum, and
/// callers must treat it as a missing-data condition, never as zeros.
pub fn reduce(temps: &[f64]) -> Option<DailyStats> {
    if temps.is_empty() {
        return None;
    }
    let tmin = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let tmax = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = temps.iter().sum::<f64>() / temps.len() as f64;
    Some(DailyStats {
        tmin,
        tavg: (mean * 10.0).round() / 10.0,
        tmax,
    })
}

/// Computes the daily normal for one month-day signature.
///
/// Issues a single gateway read and reduces the result. A signature with no
/// historical observations at all (Feb 29 against a leap-free record, or a
/// day the stations simply never reported) is `NoHistoricalData`.
pub async fn compute<S: ClimateStore>(store: &S, signature: &str) -> Result<DailyStats, QueryError> {
    let temps = store.temperatures_by_signature(signature).await?;
    reduce(&temps).ok_or_else(|| QueryError::NoHistoricalData(signature.to_string()))
}
