//! Layout value types for the week grid.
//!
//! These are derived views. They are recomputed from an event snapshot and
//! never persisted.

use chrono::{Local, NaiveDate};

use crate::models::event::Event;
use crate::utils::date::{add_days, date_start_millis, week_dates, DAY_MS};

pub const DAYS_IN_WEEK: usize = 7;

/// The 7 consecutive dates currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    dates: [NaiveDate; DAYS_IN_WEEK],
    first_day_of_week: u8,
}

impl WeekWindow {
    /// Sunday-first week containing `reference`.
    pub fn containing(reference: NaiveDate) -> Self {
        Self::with_first_day(reference, 0)
    }

    /// Week containing `reference` starting on `first_day_of_week` (0 = Sunday).
    pub fn with_first_day(reference: NaiveDate, first_day_of_week: u8) -> Self {
        Self {
            dates: week_dates(reference, first_day_of_week),
            first_day_of_week,
        }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn dates(&self) -> &[NaiveDate; DAYS_IN_WEEK] {
        &self.dates
    }

    pub fn first_date(&self) -> NaiveDate {
        self.dates[0]
    }

    pub fn last_date(&self) -> NaiveDate {
        self.dates[DAYS_IN_WEEK - 1]
    }

    pub fn first_day_of_week(&self) -> u8 {
        self.first_day_of_week
    }

    /// First instant of the first visible day.
    pub fn start_millis(&self) -> i64 {
        date_start_millis(self.first_date())
    }

    /// Last instant (23:59:59.999) of the last visible day.
    pub fn end_millis(&self) -> i64 {
        date_start_millis(self.last_date()) + DAY_MS - 1
    }

    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.iter().position(|d| *d == date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    pub fn previous(&self) -> Self {
        Self::with_first_day(add_days(self.first_date(), -7), self.first_day_of_week)
    }

    pub fn next(&self) -> Self {
        Self::with_first_day(add_days(self.first_date(), 7), self.first_day_of_week)
    }
}

/// Geometry specific to the two kinds of positioned events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Band across `day_span` day columns starting at `day_index`.
    AllDay { day_span: usize },
    /// Block inside one day column; `top`/`height` are percentages of 24 hours.
    Timed { top: f64, height: f64, columns: usize },
}

/// An event projected onto the week grid.
///
/// For all-day events `left`/`width` are percentages of the week width and
/// `column` is the stacking row. For timed events they are percentages of a
/// single day column and `column` is the packed column.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event: Event,
    pub day_index: usize,
    pub left: f64,
    pub width: f64,
    pub column: usize,
    pub z_index: u32,
    pub placement: Placement,
}

impl PositionedEvent {
    pub fn is_all_day(&self) -> bool {
        matches!(self.placement, Placement::AllDay { .. })
    }

    pub fn top(&self) -> Option<f64> {
        match self.placement {
            Placement::Timed { top, .. } => Some(top),
            Placement::AllDay { .. } => None,
        }
    }

    pub fn height(&self) -> Option<f64> {
        match self.placement {
            Placement::Timed { height, .. } => Some(height),
            Placement::AllDay { .. } => None,
        }
    }

    /// Number of columns in the day this timed event was packed into.
    pub fn columns(&self) -> Option<usize> {
        match self.placement {
            Placement::Timed { columns, .. } => Some(columns),
            Placement::AllDay { .. } => None,
        }
    }

    pub fn day_span(&self) -> Option<usize> {
        match self.placement {
            Placement::AllDay { day_span } => Some(day_span),
            Placement::Timed { .. } => None,
        }
    }

    /// Whether this event occupies the day column at `day_index`.
    pub fn covers_day(&self, day_index: usize) -> bool {
        match self.placement {
            Placement::AllDay { day_span } => {
                day_index >= self.day_index && day_index < self.day_index + day_span
            }
            Placement::Timed { .. } => day_index == self.day_index,
        }
    }

    pub fn id(&self) -> &str {
        &self.event.id
    }
}
