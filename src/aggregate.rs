/// Date-range aggregation over historical normals.
///
/// One-shot per request: validate the raw inputs, expand them into the
/// calendar dates that actually carry measurement rows, compute the daily
/// normal for each, and assemble the ordered result. No state survives
/// between requests and dataset bounds are re-read every time.

use chrono::NaiveDate;

use crate::calendar;
use crate::model::{DailyNormal, DatasetBound, DatasetBounds, QueryError};
use crate::normals;
use crate::store::ClimateStore;

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Normals for every recorded measurement date from `start` onward.
///
/// The start date must parse strictly and must fall inside the recorded
/// dataset bounds; a start before the earliest or after the latest date on
/// record is rejected with a message citing the violated bound.
pub async fn normals_from<S: ClimateStore>(
    store: &S,
    start: &str,
) -> Result<Vec<DailyNormal>, QueryError> {
    let date = calendar::parse(start)?;
    check_bounds(store, start, date).await?;

    let date_strings = store.dates_from(start).await?;
    assemble(store, &date_strings).await
}

/// Normals for every recorded measurement date in `[start, end]` inclusive.
///
/// Format validation always applies, with the offending input rendered as
/// `start/end` as it appeared in the request path. Bounds validation is
/// opt-in via `validate_bounds`; when off, out-of-range bounds simply yield
/// whatever dates the store has (possibly none).
pub async fn normals_between<S: ClimateStore>(
    store: &S,
    start: &str,
    end: &str,
    validate_bounds: bool,
) -> Result<Vec<DailyNormal>, QueryError> {
    let (start_date, end_date) = match (calendar::parse(start), calendar::parse(end)) {
        (Ok(s), Ok(e)) => (s, e),
        _ => return Err(QueryError::InvalidDateFormat(format!("{}/{}", start, end))),
    };

    if validate_bounds {
        check_bounds(store, start, start_date).await?;
        check_bounds(store, end, end_date).await?;
    }

    let date_strings = store.dates_between(start, end).await?;
    assemble(store, &date_strings).await
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Fetches the dataset bounds fresh from the gateway. `None` when the
/// measurement table is empty.
async fn dataset_bounds<S: ClimateStore>(store: &S) -> Result<Option<DatasetBounds>, QueryError> {
    match (store.earliest_date().await?, store.latest_date().await?) {
        (Some(earliest), Some(latest)) => Ok(Some(DatasetBounds { earliest, latest })),
        _ => Ok(None),
    }
}

/// Rejects a date outside the recorded dataset bounds. An empty dataset has
/// no bounds to violate, so the check passes and expansion yields nothing.
async fn check_bounds<S: ClimateStore>(
    store: &S,
    input: &str,
    date: NaiveDate,
) -> Result<(), QueryError> {
    let Some(bounds) = dataset_bounds(store).await? else {
        return Ok(());
    };
    if date < calendar::parse(&bounds.earliest)? {
        return Err(QueryError::DateOutOfRange {
            input: input.to_string(),
            bound: DatasetBound::Earliest(bounds.earliest),
        });
    }
    if date > calendar::parse(&bounds.latest)? {
        return Err(QueryError::DateOutOfRange {
            input: input.to_string(),
            bound: DatasetBound::Latest(bounds.latest),
        });
    }
    Ok(())
}

/// Computes one normal per date string, in order, and zips dates with stats.
///
/// Duplicate dates are kept: each occurrence gets its own independent
/// computation. A date whose signature matches no historical observation
/// aborts the whole request with `NoHistoricalData`.
async fn assemble<S: ClimateStore>(
    store: &S,
    date_strings: &[String],
) -> Result<Vec<DailyNormal>, QueryError> {
    let dates = calendar::expand_dates(date_strings)?;

    let mut out = Vec::with_capacity(dates.len());
    for (raw, date) in date_strings.iter().zip(dates) {
        let stats = normals::compute(store, &calendar::day_signature(date)).await?;
        out.push(DailyNormal::new(raw.clone(), stats));
    }
    Ok(out)
}
