//! `DD/MM/YYYY HH:MM` date formatting in local time.
//!
//! Accepted inputs mirror what page scripts receive from the API:
//!
//! | Input                          | Interpreted as                 |
//! |--------------------------------|--------------------------------|
//! | `2024-03-05T09:07:00+07:00`    | that instant (RFC 3339)        |
//! | `2024-03-05T09:07Z`            | that instant, minute precision |
//! | `2024-03-05T09:07:00[.fff]`    | local wall-clock time          |
//! | `2024-03-05 09:07`             | local wall-clock time          |
//! | `2024-03-05`                   | midnight UTC                   |

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::error::{Result, UtilError};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Format `input` in the host's local time zone.
pub fn format_date_time(input: &str) -> Result<String> {
    format_date_time_in(input, &Local)
}

/// Format `input` in `tz`.
pub fn format_date_time_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<String> {
    let moment = parse_in(input.trim(), tz)?;
    Ok(format!(
        "{:02}/{:02}/{} {:02}:{:02}",
        moment.day(),
        moment.month(),
        moment.year(),
        moment.hour(),
        moment.minute()
    ))
}

fn parse_in<Tz: TimeZone>(input: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(tz));
    }

    let zoned = match input.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => input.to_string(),
    };
    if let Some(instant) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&zoned, format).ok())
    {
        return Ok(instant.with_timezone(tz));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
    {
        return localize(naive, tz).ok_or_else(|| UtilError::InvalidDate(input.to_string()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight).with_timezone(tz));
        }
    }

    Err(UtilError::InvalidDate(input.to_string()))
}

/// Resolve a wall-clock time in `tz`. Ambiguous times take the earlier
/// instant; times inside a DST gap move forward by an hour.
fn localize<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&naive).earliest().or_else(|| {
        tz.from_local_datetime(&(naive + chrono::Duration::hours(1)))
            .earliest()
    })
}
