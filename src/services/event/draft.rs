//! Editable form state for creating and editing events.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use thiserror::Error;
use uuid::Uuid;

use crate::models::event::{Event, EventError, EventType};
use crate::models::settings::Settings;
use crate::services::layout::is_all_day;
use crate::utils::date::{date_start_millis, start_of_day, to_millis, DAY_MS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Event name is required")]
    EmptyTitle,
    #[error("End date/time must be after start date/time")]
    EndNotAfterStart,
    #[error("New events cannot be created on {0}")]
    CreationBlocked(NaiveDate),
    #[error("Hour {0} is outside the day")]
    InvalidHour(u32),
    #[error(transparent)]
    Invalid(#[from] EventError),
}

/// Form fields of an event being created or edited. Times have minute
/// precision like the editor inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// Present when editing an existing event.
    pub id: Option<String>,
    pub title: String,
    pub event_type: EventType,
    pub start_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_date: NaiveDate,
    pub end_time: NaiveTime,
    pub all_day: bool,
}

fn last_minute() -> NaiveTime {
    NaiveTime::MIN - Duration::minutes(1)
}

fn ensure_creation_allowed(date: NaiveDate, settings: &Settings) -> Result<(), DraftError> {
    if settings.block_sunday_creation && date.weekday() == Weekday::Sun {
        return Err(DraftError::CreationBlocked(date));
    }
    Ok(())
}

impl EventDraft {
    /// One-hour draft starting at `hour:00` on `date`.
    pub fn for_slot(date: NaiveDate, hour: u32, settings: &Settings) -> Result<Self, DraftError> {
        ensure_creation_allowed(date, settings)?;
        let start_time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or(DraftError::InvalidHour(hour))?;
        let start = date.and_time(start_time);
        let end = start + Duration::hours(1);

        Ok(Self {
            id: None,
            title: String::new(),
            event_type: EventType::Task,
            start_date: date,
            start_time,
            end_date: end.date(),
            end_time: end.time(),
            all_day: false,
        })
    }

    /// All-day draft covering `date`.
    pub fn for_all_day(date: NaiveDate, settings: &Settings) -> Result<Self, DraftError> {
        ensure_creation_allowed(date, settings)?;

        Ok(Self {
            id: None,
            title: String::new(),
            event_type: EventType::Task,
            start_date: date,
            start_time: NaiveTime::MIN,
            end_date: date,
            end_time: last_minute(),
            all_day: true,
        })
    }

    /// Draft for editing an existing event.
    pub fn from_event(event: &Event) -> Self {
        let start = event.start_time();
        let end = event.end_time();
        let all_day = is_all_day(event);

        let truncate = |time: NaiveTime| {
            NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(NaiveTime::MIN)
        };

        let (start_time, end_time) = if all_day {
            let end_time = if event.end == start_of_day(event.end) {
                NaiveTime::MIN
            } else {
                last_minute()
            };
            (NaiveTime::MIN, end_time)
        } else {
            (truncate(start.time()), truncate(end.time()))
        };

        Self {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            event_type: event.event_type,
            start_date: start.date(),
            start_time,
            end_date: end.date(),
            end_time,
            all_day,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Start and end in epoch milliseconds. All-day drafts run from the start
    /// of the start date to the last instant of the end date.
    pub fn bounds(&self) -> (i64, i64) {
        if self.all_day {
            (
                date_start_millis(self.start_date),
                date_start_millis(self.end_date) + DAY_MS - 1,
            )
        } else {
            (
                to_millis(self.start_date.and_time(self.start_time)),
                to_millis(self.end_date.and_time(self.end_time)),
            )
        }
    }

    /// Validate the form and build the event it describes.
    pub fn into_event(self) -> Result<Event, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let (start, end) = self.bounds();
        if start > end || (start == end && !self.all_day) {
            return Err(DraftError::EndNotAfterStart);
        }

        let id = self.id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Ok(Event::with_id(id, title, self.event_type, start, end)?)
    }
}
