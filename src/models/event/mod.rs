// Event module
// Calendar event record consumed by the week layout engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::utils::date::from_millis;

/// Display category of an event. Only the colour depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    #[default]
    Task,
    Holiday,
}

impl EventType {
    pub const TASK_COLOR: &'static str = "#195957";
    pub const HOLIDAY_COLOR: &'static str = "#a33737";

    /// Background colour used when rendering events of this type.
    pub fn color(self) -> &'static str {
        match self {
            EventType::Task => Self::TASK_COLOR,
            EventType::Holiday => Self::HOLIDAY_COLOR,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Task => "Task",
            EventType::Holiday => "Holiday",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end ({end}) is before its start ({start})")]
    EndBeforeStart { start: i64, end: i64 },
}

/// Calendar event with naive wall-clock bounds in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub start: i64,
    pub end: i64,
}

impl Event {
    /// Create a new event with a freshly generated id
    ///
    /// # Examples
    /// ```
    /// use week_grid::models::event::{Event, EventType};
    ///
    /// let event = Event::new("Team Meeting", EventType::Task, 0, 3_600_000).unwrap();
    /// assert!(!event.id.is_empty());
    /// ```
    pub fn new(
        title: impl Into<String>,
        event_type: EventType,
        start: i64,
        end: i64,
    ) -> Result<Self, EventError> {
        Self::with_id(Uuid::new_v4().to_string(), title, event_type, start, end)
    }

    /// Create an event with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        event_type: EventType,
        start: i64,
        end: i64,
    ) -> Result<Self, EventError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            event_type,
            start,
            end,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event. Zero-length events are allowed.
    pub fn validate(&self) -> Result<(), EventError> {
        if self.id.trim().is_empty() {
            return Err(EventError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(EventError::EmptyTitle);
        }

        if self.end < self.start {
            return Err(EventError::EndBeforeStart {
                start: self.start,
                end: self.end,
            });
        }

        Ok(())
    }

    /// Duration in milliseconds, never negative
    pub fn duration_millis(&self) -> i64 {
        self.end.saturating_sub(self.start).max(0)
    }

    pub fn start_time(&self) -> NaiveDateTime {
        from_millis(self.start)
    }

    pub fn end_time(&self) -> NaiveDateTime {
        from_millis(self.end)
    }
}
