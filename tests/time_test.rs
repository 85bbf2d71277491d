mod utils;

use dex_info_helpers::{format_time, format_time_since, to_nice_date, to_nice_date_year};
use utils::test_utils::fixed_now;

/// 25 hours ago reads as one day
#[test]
fn test_format_time_twenty_five_hours() {
    let now = fixed_now();
    assert_eq!(format_time_since(now.timestamp() - 90_000, now), "1 day ago");
}

/// Units are chosen by the next finer count
#[test]
fn test_format_time_cutoffs() {
    let now = fixed_now();
    let at = |seconds_ago: i64| format_time_since(now.timestamp() - seconds_ago, now);

    assert_eq!(at(30), "30 seconds ago");
    assert_eq!(at(119), "1 minute ago");
    assert_eq!(at(120), "2 minutes ago");
    assert_eq!(at(7_200), "2 hours ago");
    assert_eq!(at(47 * 3_600), "1 day ago");
    assert_eq!(at(48 * 3_600), "2 days ago");
}

/// The wall-clock variant agrees with an explicit clock
#[test]
fn test_format_time_uses_current_clock() {
    let ten_days_ago = chrono::Utc::now().timestamp() - 10 * 86_400;
    assert_eq!(format_time(ten_days_ago), "10 days ago");
}

/// Calendar dates are rendered in UTC
#[test]
fn test_nice_dates() {
    assert_eq!(to_nice_date(0), "Jan 01");
    assert_eq!(to_nice_date_year(0), "January 01, 1970");
    assert_eq!(to_nice_date_year(1_700_000_000), "November 14, 2023");
}
