// Settings module
// Layout and editing preferences, persisted as TOML

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("first_day_of_week must be 0-6 (got {0})")]
    FirstDayOfWeek(u8),
    #[error("min_event_minutes must be 1-1440 (got {0})")]
    MinEventMinutes(u32),
    #[error("track_width must be in (0, 100] (got {0})")]
    TrackWidth(f64),
    #[error("column_gap must be >= 0 and narrower than the track (got {0})")]
    ColumnGap(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, etc.
    pub first_day_of_week: u8,
    /// Visual minimum height of a timed block, in minutes.
    pub min_event_minutes: u32,
    /// Share of a day column used by timed blocks, in percent.
    pub track_width: f64,
    /// Gap between packed columns, in percent of the day column.
    pub column_gap: f64,
    pub block_sunday_creation: bool,
    pub events_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 0, // Sunday
            min_event_minutes: 15,
            track_width: 95.0,
            column_gap: 1.0,
            block_sunday_creation: true,
            events_file: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.first_day_of_week > 6 {
            return Err(SettingsError::FirstDayOfWeek(self.first_day_of_week));
        }

        if self.min_event_minutes == 0 || self.min_event_minutes > 1440 {
            return Err(SettingsError::MinEventMinutes(self.min_event_minutes));
        }

        if !(self.track_width > 0.0 && self.track_width <= 100.0) {
            return Err(SettingsError::TrackWidth(self.track_width));
        }

        if !(self.column_gap >= 0.0 && self.column_gap < self.track_width) {
            return Err(SettingsError::ColumnGap(self.column_gap));
        }

        Ok(())
    }

    /// Minimum timed block height as a percentage of the 24-hour column.
    pub fn min_height_percent(&self) -> f64 {
        f64::from(self.min_event_minutes) / crate::utils::date::MINUTES_PER_DAY * 100.0
    }
}
