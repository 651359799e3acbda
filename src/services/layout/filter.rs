//! Selection of events visible in a week window.

use crate::models::event::Event;
use crate::models::layout::WeekWindow;

/// Events whose interval intersects the window. Touching a boundary at a
/// single instant does not count.
pub fn events_in_window<'a>(events: &'a [Event], window: &WeekWindow) -> Vec<&'a Event> {
    let week_start = window.start_millis();
    let week_end = window.end_millis();

    events
        .iter()
        .filter(|event| event.start < week_end && event.end > week_start)
        .collect()
}
