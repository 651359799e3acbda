//! Vertical placement of timed events within their start day.

use crate::models::event::Event;
use crate::models::layout::{Placement, PositionedEvent, WeekWindow};
use crate::utils::date::{date_of, end_of_day, fractional_hour, MINUTES_PER_DAY, MINUTE_MS};

/// Vertical geometry of a timed block, in percent of the 24-hour column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalSpan {
    pub top: f64,
    pub height: f64,
}

/// Whole minutes the event occupies on its start day.
///
/// The end is clamped to 23:59:59.999 of the start day, so an event crossing
/// midnight only counts the part before it.
pub fn visible_minutes(event: &Event) -> i64 {
    let clamped_start = event.start;
    let clamped_end = event.end.min(end_of_day(event.start));
    (clamped_end.saturating_sub(clamped_start) / MINUTE_MS).max(0)
}

/// `top` from the start's hour and minute, `height` from the clamped duration,
/// never shorter than `min_height`.
pub fn vertical_span(event: &Event, min_height: f64) -> VerticalSpan {
    let top = fractional_hour(event.start) / 24.0 * 100.0;
    let height = visible_minutes(event) as f64 / MINUTES_PER_DAY * 100.0;

    VerticalSpan {
        top,
        height: height.max(min_height),
    }
}

/// Place timed events in the column of their start day. Events whose start
/// day is not visible are skipped. Horizontal geometry is left as a single
/// full-track column for the overlap packer to refine.
pub fn position_timed_events(
    events: &[&Event],
    window: &WeekWindow,
    min_height: f64,
    track_width: f64,
) -> Vec<PositionedEvent> {
    events
        .iter()
        .filter_map(|event| {
            let day_index = window.index_of(date_of(event.start))?;
            let span = vertical_span(event, min_height);

            Some(PositionedEvent {
                event: (*event).clone(),
                day_index,
                left: 0.0,
                width: track_width,
                column: 0,
                z_index: 1,
                placement: Placement::Timed {
                    top: span.top,
                    height: span.height,
                    columns: 1,
                },
            })
        })
        .collect()
}
