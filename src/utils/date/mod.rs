// Date utility functions
// Pure proleptic-Gregorian helpers over (year, month, day) triples

use chrono::{Datelike, Local, NaiveDate};

/// Today's civil date from the host clock.
///
/// Materialized at the shell boundary once per render and passed into the
/// navigator's derivations; the navigator never caches it, so midnight
/// rollover shows up on the next frame. All downstream arithmetic works on
/// the `NaiveDate` triple only, never on timestamps, keeping the grid
/// insensitive to timezone and DST edges.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Clamp a year to the range the grid derivations can represent.
///
/// One year inside chrono's `NaiveDate` limits on each side: day counts
/// look at the first of the following month and week rows reconstruct the
/// neighboring months, so the boundary years themselves are excluded.
pub fn clamp_year(year: i32) -> i32 {
    year.clamp(NaiveDate::MIN.year() + 1, NaiveDate::MAX.year() - 1)
}

/// Number of days in a month, zero-based month index.
///
/// Standard Gregorian rule, including the century leap-year exception
/// (1900 has 28 February days, 2000 has 29).
///
/// # Panics
/// Panics when `month0 > 11` or the year is outside chrono's supported
/// range; both are programming errors in this codebase.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

/// Weekday of the first day of a month, as a Sun=0..Sat=6 column offset.
///
/// # Panics
/// Same conditions as [`days_in_month`].
pub fn first_weekday_offset(year: i32, month0: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("valid calendar date")
        .weekday()
        .num_days_from_sunday()
}
