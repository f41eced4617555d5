//! Parsing of the local `yyyy-MM-ddTHH:mm` timestamps used throughout the payload.

use crate::weather_data::error::WeatherDataError;
use chrono::{DateTime, Datelike, NaiveDateTime, TimeDelta, TimeZone};
use chrono_tz::Tz;
use log::warn;

/// Years before this are sentinels: the API answers with a date around the Unix epoch (but not
/// always exactly at it) where it should answer with no date.
pub const DEFAULT_SENTINEL_CUTOFF_YEAR: i32 = 2000;

const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Parses a local timestamp in `timezone`.
///
/// Returns `Ok(None)` for sentinel dates (year before `cutoff_year`). An ambiguous local time
/// (clocks going back) resolves to the earlier instant; a time inside a DST gap is moved one
/// hour forward.
///
/// # Errors
///
/// * [`WeatherDataError::DateParse`] if `value` matches neither accepted format.
/// * [`WeatherDataError::NonexistentLocalTime`] if the time cannot be placed in `timezone`.
pub fn parse_local_time(
    value: &str,
    timezone: Tz,
    cutoff_year: i32,
) -> Result<Option<DateTime<Tz>>, WeatherDataError> {
    let value = value.trim();
    let naive = parse_naive(value)?;
    if naive.year() < cutoff_year {
        return Ok(None);
    }
    localize(&naive, timezone)
        .map(Some)
        .ok_or_else(|| WeatherDataError::NonexistentLocalTime(value.to_string()))
}

/// Places a wall-clock time in `timezone`: the earlier instant when ambiguous, one hour later
/// when it falls in a DST gap.
pub(crate) fn localize(naive: &NaiveDateTime, timezone: Tz) -> Option<DateTime<Tz>> {
    timezone.from_local_datetime(naive).earliest().or_else(|| {
        naive
            .checked_add_signed(TimeDelta::hours(1))
            .and_then(|shifted| timezone.from_local_datetime(&shifted).earliest())
    })
}

/// Like [`parse_local_time`], but any failure is logged and treated as an absent date.
pub(crate) fn parse_or_absent(
    value: Option<&str>,
    timezone: Tz,
    cutoff_year: i32,
) -> Option<DateTime<Tz>> {
    match parse_local_time(value?, timezone, cutoff_year) {
        Ok(instant) => instant,
        Err(e) => {
            warn!("{e}, treating it as absent");
            None
        }
    }
}

fn parse_naive(value: &str) -> Result<NaiveDateTime, WeatherDataError> {
    NaiveDateTime::parse_from_str(value, FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(value, FORMATS[1]))
        .map_err(|source| WeatherDataError::DateParse {
            value: value.to_string(),
            source,
        })
}
