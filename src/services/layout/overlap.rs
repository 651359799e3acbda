//! Side-by-side packing of overlapping timed events.
//!
//! Greedy interval partitioning: events are visited in start order and
//! dropped into the leftmost column whose last event has already ended.
//! Visiting in start order makes the column count equal to the peak number
//! of simultaneously active events.

use super::all_day::by_start_then_id;
use crate::models::layout::{Placement, PositionedEvent};

/// Horizontal track shared by the packed columns of one day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnTrack {
    /// Total width available to blocks, in percent of the day column.
    pub width: f64,
    /// Gap between adjacent columns, in percent of the day column.
    pub gap: f64,
}

impl Default for ColumnTrack {
    fn default() -> Self {
        Self {
            width: 95.0,
            gap: 1.0,
        }
    }
}

impl ColumnTrack {
    /// Gap between `columns` adjacent columns. Shrinks once the gaps alone
    /// would overflow the track, so the last column still ends at `width`.
    pub fn column_gap(&self, columns: usize) -> f64 {
        if columns <= 1 {
            return 0.0;
        }
        self.gap.min(self.width / (columns - 1) as f64).max(0.0)
    }

    pub fn column_width(&self, columns: usize) -> f64 {
        if columns <= 1 {
            return self.width;
        }
        let n = columns as f64;
        ((self.width - (n - 1.0) * self.column_gap(columns)) / n).max(0.0)
    }
}

/// Assign columns to the timed events of a single day.
///
/// Sorts `day_events` by start (ties by id) and returns the number of columns
/// opened.
pub fn pack_day(day_events: &mut [PositionedEvent], track: ColumnTrack) -> usize {
    day_events.sort_by(|a, b| by_start_then_id(&a.event, &b.event));

    // Arena of columns, each holding the end of its most recently placed event.
    let mut column_ends: Vec<i64> = Vec::new();
    let mut assigned = Vec::with_capacity(day_events.len());

    for positioned in day_events.iter() {
        let start = positioned.event.start;
        let end = positioned.event.end.max(start);

        let column = match column_ends.iter().position(|last_end| *last_end <= start) {
            Some(column) => {
                column_ends[column] = end;
                column
            }
            None => {
                column_ends.push(end);
                column_ends.len() - 1
            }
        };
        assigned.push(column);
    }

    let columns = column_ends.len();
    let width = track.column_width(columns);
    let gap = track.column_gap(columns);

    for (positioned, column) in day_events.iter_mut().zip(assigned) {
        positioned.column = column;
        positioned.width = width;
        positioned.left = column as f64 * (width + gap);
        positioned.z_index = column as u32 + 1;
        if let Placement::Timed { columns: total, .. } = &mut positioned.placement {
            *total = columns;
        }
    }

    columns
}

/// Pack every day independently. The result is ordered by day, then start.
pub fn pack_timed_events(events: &mut [PositionedEvent], track: ColumnTrack) {
    events.sort_by(|a, b| {
        a.day_index
            .cmp(&b.day_index)
            .then_with(|| by_start_then_id(&a.event, &b.event))
    });

    for day_events in events.chunk_by_mut(|a, b| a.day_index == b.day_index) {
        let columns = pack_day(day_events, track);
        log::debug!(
            "Packed {} timed events on day {} into {} columns",
            day_events.len(),
            day_events[0].day_index,
            columns
        );
    }
}
