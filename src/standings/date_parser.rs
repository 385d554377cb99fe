//! Italian prose dates ("Sabato 11 Luglio 2026") to UTC instants.

use crate::constants::dates::NEUTRAL_HOUR_UTC;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Italian month names in calendar order.
pub const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

static MONTH_LOOKUP: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    ITALIAN_MONTHS
        .iter()
        .zip(1u32..)
        .map(|(name, number)| (*name, number))
        .collect()
});

// Unanchored: any prefix (weekday, other numbers) and suffix (time, notes) is ignored.
// Only the twelve month names can fill the middle slot.
static DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)(\d{{1,2}})\s+({})\s+(\d{{4}})", ITALIAN_MONTHS.join("|"));
    Regex::new(&pattern).expect("date pattern compiles")
});

/// Looks up a full Italian month name, case-insensitively. Returns 1..=12.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_LOOKUP.get(name.to_lowercase().as_str()).copied()
}

/// Parses a free-text Italian date into the instant at 12:00 UTC of that day.
///
/// The first `{day} {month} {year}` triplet whose middle word is an Italian
/// month name is used, so earlier "Tappa 2 Rimini 2026" style text is
/// skipped. `None` is the normal outcome for prose that does not match:
/// numeric dates, foreign month names, abbreviations, empty strings, and
/// days that do not exist in the given month.
///
/// # Examples
///
/// ```
/// use chrono::{Datelike, Timelike};
/// use tour_standings::standings::parse_date;
///
/// let instant = parse_date("Sabato 11 Luglio 2026").unwrap();
/// assert_eq!((instant.year(), instant.month(), instant.day()), (2026, 7, 11));
/// assert_eq!(instant.hour(), 12);
///
/// assert!(parse_date("11/07/2026").is_none());
/// ```
pub fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    let trimmed = input.trim();
    let Some(captures) = DAY_MONTH_YEAR.captures(trimmed) else {
        debug!("No day-month-year pattern in date '{trimmed}'");
        return None;
    };

    let day: u32 = captures[1].parse().ok()?;
    let year: i32 = captures[3].parse().ok()?;
    let Some(month) = month_number(&captures[2]) else {
        debug!("Unknown Italian month '{}' in date '{trimmed}'", &captures[2]);
        return None;
    };

    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        debug!("Day {day} does not exist in {month}/{year} (input '{trimmed}')");
        return None;
    };

    let naive = date.and_hms_opt(NEUTRAL_HOUR_UTC, 0, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}
