//! Canonical timestamp normalization
//!
//! Every parameter the API documents as a date/timestamp goes through
//! [`normalize_timestamp`] before it reaches the transport layer. The output
//! is always the fixed-width `YYYY-MM-DDTHH:mm:ss±HH:MM` form: zero-padded,
//! explicit numeric offset (`+` for zero or positive), no `Z` suffix, no
//! fractional seconds.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

use crate::constants::TIMESTAMP_FORMAT;
use crate::errors::{HabitifyError, Result};

/// Canonicalize a date input using the local timezone offset.
///
/// * `None` formats the current instant in the local offset.
/// * `Some(input)` reinterprets the input in the local offset and reformats
///   it; the instant is preserved for offset-carrying inputs, and inputs
///   without an offset are read as local wall time.
///
/// Deterministic for a fixed input and fixed offset: the same input always
/// produces the same string.
///
/// # Errors
///
/// Returns [`HabitifyError::InvalidArgument`] when the input is not a
/// recognizable date or datetime.
pub fn normalize_timestamp(input: Option<&str>) -> Result<String> {
    let offset = *Local::now().offset();
    normalize_in_offset(input, offset)
}

/// Offset-parameterized core of [`normalize_timestamp`].
///
/// Pinning the offset makes the function a pure input-to-string mapping,
/// which is what the determinism tests exercise.
pub fn normalize_in_offset(input: Option<&str>, offset: FixedOffset) -> Result<String> {
    let instant = match input {
        Some(raw) => parse_input(raw, offset)?,
        None => Local::now().fixed_offset(),
    };
    Ok(instant.with_timezone(&offset).format(TIMESTAMP_FORMAT).to_string())
}

/// Accept the forms callers actually hand over: RFC 3339 (offset or `Z`),
/// a naive datetime, or a bare date read as local midnight.
fn parse_input(raw: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return resolve_local(naive, offset, raw);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return resolve_local(naive, offset, raw);
        }
    }
    Err(HabitifyError::InvalidArgument(format!("unrecognized date input: {raw:?}")))
}

fn resolve_local(
    naive: NaiveDateTime,
    offset: FixedOffset,
    raw: &str,
) -> Result<DateTime<FixedOffset>> {
    naive
        .and_local_timezone(offset)
        .single()
        .ok_or_else(|| HabitifyError::InvalidArgument(format!("ambiguous date input: {raw:?}")))
}
