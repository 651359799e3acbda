//! All-day vs timed classification.

use crate::models::event::Event;
use crate::utils::date::{end_of_day, start_of_day, DAY_MS, MINUTE_MS};

/// Durations at or above this count as a full day (one day minus one second).
pub const FULL_DAY_THRESHOLD_MS: i64 = DAY_MS - 1_000;

/// An event is all-day when it lasts at least [`FULL_DAY_THRESHOLD_MS`], or
/// when it starts exactly at midnight and ends within the final minute of its
/// own end day (`23:59` as entered in the editor, or `23:59:59.999`).
pub fn is_all_day(event: &Event) -> bool {
    let duration = event.end.saturating_sub(event.start);
    if duration >= FULL_DAY_THRESHOLD_MS {
        return true;
    }

    let starts_at_day_boundary = event.start == start_of_day(event.start);
    let ends_at_day_boundary = end_of_day(event.end) - event.end < MINUTE_MS;

    starts_at_day_boundary && ends_at_day_boundary
}
