// Date utility functions
// Shared calendar arithmetic for the layout services

use chrono::{DateTime, Datelike, Local, NaiveDate};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Midnight at the start of `date`'s calendar day.
///
/// Falls back to the instant itself when midnight does not exist locally
/// (a DST jump across 00:00).
pub fn start_of_day(date: DateTime<Local>) -> DateTime<Local> {
    date.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|t| t.and_local_timezone(date.timezone()).earliest())
        .unwrap_or(date)
}

/// Number of days in the given month, via day 0 of the next month.
/// Returns `None` for an invalid month number.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next_first.signed_duration_since(first).num_days() as u32)
}

/// Weekday column (0 = Sunday) of the first day of the given month.
pub fn first_weekday_of_month(year: i32, month: u32) -> Option<u32> {
    NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.weekday().num_days_from_sunday())
}
