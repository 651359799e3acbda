// Date utility functions
// Naive wall-clock helpers shared by the layout engine, drafts and the CLI.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Milliseconds in one calendar day. Wall-clock time has no DST gaps here.
pub const DAY_MS: i64 = 86_400_000;
pub const HOUR_MS: i64 = 3_600_000;
pub const MINUTE_MS: i64 = 60_000;
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Convert epoch milliseconds into a naive wall-clock instant.
///
/// Values beyond chrono's representable range saturate to the nearest bound.
pub fn from_millis(ms: i64) -> NaiveDateTime {
    match DateTime::from_timestamp_millis(ms) {
        Some(dt) => dt.naive_utc(),
        None if ms < 0 => NaiveDateTime::MIN,
        None => NaiveDateTime::MAX,
    }
}

pub fn to_millis(dt: NaiveDateTime) -> i64 {
    dt.and_utc().timestamp_millis()
}

pub fn date_of(ms: i64) -> NaiveDate {
    from_millis(ms).date()
}

pub fn date_start_millis(date: NaiveDate) -> i64 {
    to_millis(date.and_time(NaiveTime::MIN))
}

/// First instant (00:00:00.000) of the day containing `ms`.
pub fn start_of_day(ms: i64) -> i64 {
    ms.saturating_sub(ms.rem_euclid(DAY_MS))
}

/// Last instant (23:59:59.999) of the day containing `ms`.
pub fn end_of_day(ms: i64) -> i64 {
    start_of_day(ms).saturating_add(DAY_MS - 1)
}

pub fn is_same_day(a: i64, b: i64) -> bool {
    a.div_euclid(DAY_MS) == b.div_euclid(DAY_MS)
}

/// Whole calendar days from the day of `from` to the day of `to`.
pub fn days_between(from: i64, to: i64) -> i64 {
    to.div_euclid(DAY_MS) - from.div_euclid(DAY_MS)
}

/// Hour of day plus minutes as a fraction; seconds are ignored.
pub fn fractional_hour(ms: i64) -> f64 {
    let time = from_millis(ms).time();
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0
}

/// Shift `date` by `days`, saturating at the first and last representable dates.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    match Duration::try_days(days).and_then(|delta| date.checked_add_signed(delta)) {
        Some(shifted) => shifted,
        None if days < 0 => NaiveDate::MIN,
        None => NaiveDate::MAX,
    }
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    add_days(date, -offset)
}

/// The 7 consecutive dates of the week containing `date`.
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> [NaiveDate; 7] {
    let start = get_week_start(date, first_day_of_week);
    std::array::from_fn(|offset| add_days(start, offset as i64))
}

/// Labels for the 24 hour rows of the time grid.
pub fn hour_labels() -> Vec<(u32, String)> {
    (0..24)
        .map(|hour| {
            let label = match hour {
                0 => "12 AM".to_string(),
                1..=11 => format!("{} AM", hour),
                12 => "Noon".to_string(),
                _ => format!("{} PM", hour - 12),
            };
            (hour, label)
        })
        .collect()
}
