/// Calendar date parsing and day-of-year bucketing.
///
/// Every date that enters the service — from the URL path or from stored
/// measurement rows — passes through `parse`, which accepts exactly one
/// shape: strict zero-padded `YYYY-MM-DD`. chrono's `%Y-%m-%d` parser is
/// more forgiving than the API contract (it accepts `"2017-1-1"`), so the
/// digit-group shape is checked explicitly before chrono validates the
/// calendar values.

use chrono::NaiveDate;

use crate::model::QueryError;

/// The wire format for every date in the service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Parsing and formatting
// ---------------------------------------------------------------------------

/// Returns true when `s` has the exact 4-2-2 digit grouping `YYYY-MM-DD`.
/// Shape only; calendar validity is checked separately.
fn has_strict_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    })
}

/// Parses a strict `YYYY-MM-DD` string into a calendar date.
///
/// Rejects wrong separators, missing zero-padding, non-numeric fields,
/// wrong field counts, and shapes that pass but name an impossible date
/// (`"2017-13-01"`, `"2017-02-30"`).
pub fn parse(s: &str) -> Result<NaiveDate, QueryError> {
    if !has_strict_shape(s) {
        return Err(QueryError::InvalidDateFormat(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| QueryError::InvalidDateFormat(s.to_string()))
}

/// Formats a calendar date back into the wire format.
/// Inverse of `parse`: `format(parse(s)) == s` for every accepted `s`.
pub fn format(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Day-of-year signatures
// ---------------------------------------------------------------------------

/// Returns the zero-padded `MM-DD` portion of a date — the grouping key that
/// ties one calendar day to its counterparts in every other year on record.
pub fn day_signature(date: NaiveDate) -> String {
    date.format("%m-%d").to_string()
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Parses a sequence of raw date strings, preserving input order exactly.
///
/// The order governs the order of the final aggregation output, so this
/// neither sorts nor deduplicates — it mirrors whatever the query layer
/// returned (ascending, since the gateway reads are ordered by date).
pub fn expand_dates(raw: &[String]) -> Result<Vec<NaiveDate>, QueryError> {
    raw.iter().map(|s| parse(s)).collect()
}
