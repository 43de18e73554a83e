//! Calendar-month arithmetic used to place goals and cash flows on the
//! simulation timeline.
//!
//! The timeline is expressed as [`MonthIndex`] offsets from an origin month
//! (the "current month" of a projection request). Index `0` is the origin,
//! negative indices lie in the past.

use chrono::{Datelike, NaiveDate};

/// Signed month offset relative to the simulation origin.
pub type MonthIndex = i32;

/// Truncates a date to the first day of its month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Returns the number of whole calendar months from `origin` to `date`,
/// ignoring the day component of both.
pub fn month_index(origin: NaiveDate, date: NaiveDate) -> MonthIndex {
    absolute_month(date) - absolute_month(origin)
}

/// Converts an unsigned request offset to a timeline index, saturating at
/// [`MonthIndex::MAX`].
pub fn offset_index(offset: u32) -> MonthIndex {
    MonthIndex::try_from(offset).unwrap_or(MonthIndex::MAX)
}

/// Returns the first day of the month `offset` months after `origin`.
pub fn shift_month(origin: NaiveDate, offset: MonthIndex) -> NaiveDate {
    let total = absolute_month(origin).saturating_add(offset);
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_else(|| month_start(origin))
}

/// Machine-friendly month identifier, e.g. `2026-10`.
pub fn month_id(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Human-readable month label, e.g. `October 2026`.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Parses a `YYYY-MM` identifier into the first day of that month.
pub fn parse_month_id(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// Describes how far away a future month is, e.g. `Starts in 3 months`.
pub fn starts_in_label(months: MonthIndex) -> String {
    match months {
        i32::MIN..=0 => "Starts this month".into(),
        1 => "Starts in 1 month".into(),
        n => format!("Starts in {n} months"),
    }
}

fn absolute_month(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}
