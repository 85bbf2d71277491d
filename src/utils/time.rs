//! Relative and calendar time formatting.
//!
//! Every conversion is anchored to UTC so all users see the same dates.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::Error;

/// Convert Unix seconds to a UTC date-time
pub fn timestamp_to_utc(unix: i64) -> Result<DateTime<Utc>, Error> {
    DateTime::from_timestamp(unix, 0).ok_or(Error::InvalidTimestamp(unix))
}

/// Time elapsed since `unix`, e.g. `"5 minutes ago"`
pub fn format_time(unix: i64) -> String {
    format_time_since(unix, Utc::now())
}

/// Time elapsed between `unix` and `now`.
///
/// The unit is picked from the next finer count: 24 or more hours shows
/// days, 60 or more minutes shows hours, 60 or more seconds shows minutes,
/// anything else shows seconds. Counts are truncated toward zero.
pub fn format_time_since(unix: i64, now: DateTime<Utc>) -> String {
    let timestamp = match timestamp_to_utc(unix) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            debug!(error = %e, "cannot format relative time");
            return String::new();
        }
    };

    let elapsed = now.signed_duration_since(timestamp);
    let seconds = elapsed.num_seconds();
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    let (count, unit) = if hours >= 24 {
        (days, "day")
    } else if minutes >= 60 {
        (hours, "hour")
    } else if seconds >= 60 {
        (minutes, "minute")
    } else {
        (seconds, "second")
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// Short UTC date, e.g. `"Jan 05"`
pub fn to_nice_date(unix: i64) -> String {
    format_utc(unix, "%b %d")
}

/// Long UTC date, e.g. `"January 05, 2021"`
pub fn to_nice_date_year(unix: i64) -> String {
    format_utc(unix, "%B %d, %Y")
}

fn format_utc(unix: i64, pattern: &str) -> String {
    match timestamp_to_utc(unix) {
        Ok(timestamp) => timestamp.format(pattern).to_string(),
        Err(e) => {
            debug!(error = %e, "cannot format date");
            String::new()
        }
    }
}
