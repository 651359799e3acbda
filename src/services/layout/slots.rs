//! Hour-slot membership for grid cells.

use crate::models::layout::{PositionedEvent, DAYS_IN_WEEK};
use crate::utils::date::{days_between, fractional_hour};

/// Start and end of a timed event in hours relative to its start day.
///
/// The end keeps counting past midnight (25.5 is 01:30 the next day) so a
/// block clamped to its start day still answers for later slots.
pub fn fractional_bounds(positioned: &PositionedEvent) -> (f64, f64) {
    let event = &positioned.event;
    let start = fractional_hour(event.start);
    let end = fractional_hour(event.end) + 24.0 * days_between(event.start, event.end) as f64;
    (start, end)
}

/// Whether a timed event intersects the hour bucket `[hour, hour + 1)`.
pub fn occupies_slot(positioned: &PositionedEvent, hour: u32) -> bool {
    let (start, end) = fractional_bounds(positioned);
    let slot_start = f64::from(hour);
    let slot_end = slot_start + 1.0;

    let starts_in_slot = start >= slot_start && start < slot_end;
    let ends_in_slot = end > slot_start && end <= slot_end;
    let spans_slot = start < slot_start && end > slot_end;

    starts_in_slot || ends_in_slot || spans_slot
}

/// Timed events placed on `day_index` that occupy hour `hour`.
pub fn events_in_slot(timed: &[PositionedEvent], day_index: usize, hour: u32) -> Vec<&PositionedEvent> {
    if day_index >= DAYS_IN_WEEK || hour >= 24 {
        return Vec::new();
    }

    timed
        .iter()
        .filter(|p| !p.is_all_day() && p.day_index == day_index)
        .filter(|p| occupies_slot(p, hour))
        .collect()
}
