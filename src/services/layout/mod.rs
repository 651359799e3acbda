//! Week layout engine.
//!
//! Turns an unordered event snapshot into positioned all-day bands and packed
//! timed blocks for one [`WeekWindow`]. Every stage is a pure function; a
//! [`WeekLayout`] is rebuilt wholesale whenever the snapshot or the window
//! changes.

pub mod all_day;
pub mod classify;
pub mod filter;
pub mod overlap;
pub mod slots;
pub mod timed;

use crate::models::event::Event;
use crate::models::layout::{PositionedEvent, WeekWindow};
use crate::models::settings::Settings;

pub use classify::is_all_day;
pub use filter::events_in_window;
pub use overlap::ColumnTrack;

/// Tunables for the positioning stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    /// Minimum timed block height, in percent of 24 hours.
    pub min_height: f64,
    pub track: ColumnTrack,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for LayoutOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            min_height: settings.min_height_percent(),
            track: ColumnTrack {
                width: settings.track_width,
                gap: settings.column_gap,
            },
        }
    }
}

/// Positioned view of one week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    window: WeekWindow,
    all_day: Vec<PositionedEvent>,
    timed: Vec<PositionedEvent>,
}

impl WeekLayout {
    pub fn compute(events: &[Event], window: &WeekWindow, options: &LayoutOptions) -> Self {
        for event in events.iter().filter(|e| e.end < e.start) {
            log::warn!(
                "Event {} ends before it starts ({} < {}); laying out as zero-length",
                event.id,
                event.end,
                event.start
            );
        }

        let visible = events_in_window(events, window);
        let (all_day_events, timed_events): (Vec<&Event>, Vec<&Event>) =
            visible.into_iter().partition(|event| is_all_day(event));

        let all_day = all_day::position_all_day_events(&all_day_events, window);
        let mut timed = timed::position_timed_events(
            &timed_events,
            window,
            options.min_height,
            options.track.width,
        );
        overlap::pack_timed_events(&mut timed, options.track);

        log::debug!(
            "Laid out week of {}: {} all-day, {} timed (of {} events)",
            window.first_date(),
            all_day.len(),
            timed.len(),
            events.len()
        );

        Self {
            window: *window,
            all_day,
            timed,
        }
    }

    pub fn window(&self) -> &WeekWindow {
        &self.window
    }

    /// All-day bands, one per event, ordered by start then id.
    pub fn all_day_events(&self) -> &[PositionedEvent] {
        &self.all_day
    }

    /// Timed blocks ordered by day, then start, then id.
    pub fn timed_events(&self) -> &[PositionedEvent] {
        &self.timed
    }

    pub fn timed_events_on_day(&self, day_index: usize) -> impl Iterator<Item = &PositionedEvent> {
        self.timed.iter().filter(move |p| p.day_index == day_index)
    }

    /// All-day bands touching `day_index`, in stacking order.
    pub fn all_day_events_on_day(&self, day_index: usize) -> Vec<&PositionedEvent> {
        let mut on_day: Vec<&PositionedEvent> = self
            .all_day
            .iter()
            .filter(|p| p.covers_day(day_index))
            .collect();
        on_day.sort_by_key(|p| p.column);
        on_day
    }

    /// Number of stacked rows the all-day ribbon needs.
    pub fn all_day_rows(&self) -> usize {
        self.all_day
            .iter()
            .filter(|p| p.day_span().unwrap_or(0) > 0)
            .map(|p| p.column + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn events_in_slot(&self, day_index: usize, hour: u32) -> Vec<&PositionedEvent> {
        slots::events_in_slot(&self.timed, day_index, hour)
    }

    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }
}
