//! Horizontal spans and stacking rows for all-day events.

use std::cmp::Ordering;

use crate::models::event::Event;
use crate::models::layout::{Placement, PositionedEvent, WeekWindow, DAYS_IN_WEEK};
use crate::utils::date::date_of;

/// Visible day range of an all-day event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub start_day_index: usize,
    pub day_span: usize,
}

impl DaySpan {
    pub fn end_day_index(&self) -> usize {
        self.start_day_index + self.day_span
    }
}

/// Clamp an event to the visible days. The end day is included when visible.
pub fn day_span(event: &Event, window: &WeekWindow) -> DaySpan {
    let start_date = date_of(event.start);
    let end_date = date_of(event.end);

    // Events that begin before the window never find a later day, so they
    // fall back to the first column.
    let mut start_index = window
        .dates()
        .iter()
        .position(|date| *date >= start_date)
        .unwrap_or(0);

    let end_index = match window.index_of(end_date) {
        Some(index) => index + 1,
        None if end_date > window.last_date() => DAYS_IN_WEEK,
        None => 0,
    };

    if start_index > end_index {
        start_index = end_index;
    }

    DaySpan {
        start_day_index: start_index,
        day_span: end_index - start_index,
    }
}

/// Stable stacking order: earliest start first, ties by id.
pub(crate) fn by_start_then_id(a: &Event, b: &Event) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
}

/// Position all-day events as single spanning blocks.
///
/// Each event takes the lowest row that is free on every day it covers, so
/// events sharing a day always land on distinct rows.
pub fn position_all_day_events(events: &[&Event], window: &WeekWindow) -> Vec<PositionedEvent> {
    let mut ordered: Vec<&Event> = events.to_vec();
    ordered.sort_by(|a, b| by_start_then_id(a, b));

    let mut rows_by_day: Vec<Vec<bool>> = vec![Vec::new(); DAYS_IN_WEEK];
    let mut positioned = Vec::with_capacity(ordered.len());

    for event in ordered {
        let span = day_span(event, window);
        let days = span.start_day_index..span.end_day_index();

        let row = (0..)
            .find(|row| {
                days.clone()
                    .all(|day| !rows_by_day[day].get(*row).copied().unwrap_or(false))
            })
            .unwrap_or(0);

        for day in days {
            let taken = &mut rows_by_day[day];
            if taken.len() <= row {
                taken.resize(row + 1, false);
            }
            taken[row] = true;
        }

        let week_len = DAYS_IN_WEEK as f64;
        positioned.push(PositionedEvent {
            event: event.clone(),
            day_index: span.start_day_index,
            left: span.start_day_index as f64 / week_len * 100.0,
            width: span.day_span as f64 / week_len * 100.0,
            column: row,
            z_index: row as u32 + 1,
            placement: Placement::AllDay {
                day_span: span.day_span,
            },
        });
    }

    positioned
}
