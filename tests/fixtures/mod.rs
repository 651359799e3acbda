// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use week_grid::models::event::{Event, EventType};
use week_grid::utils::date::to_millis;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Thursday, May 1 2025. Its Sunday-start week runs Apr 27 - May 3.
    pub fn may_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap()
    }

    /// Sunday, Apr 27 2025
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 27).unwrap()
    }

    /// Day `offset` of the Apr 27 week at `hour:minute`
    pub fn at(offset: i64, hour: u32, minute: u32) -> NaiveDateTime {
        (week_start() + chrono::Duration::days(offset))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    /// Epoch milliseconds of [`at`]
    pub fn ms(offset: i64, hour: u32, minute: u32) -> i64 {
        to_millis(at(offset, hour, minute))
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Timed task on day `offset` of the Apr 27 week
    pub fn task(id: &str, offset: i64, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::with_id(
            id,
            format!("Task {}", id),
            EventType::Task,
            dates::ms(offset, start.0, start.1),
            dates::ms(offset, end.0, end.1),
        )
        .unwrap()
    }

    /// Holiday from the start of `first` to the last millisecond of `last`
    pub fn holiday(id: &str, first: i64, last: i64) -> Event {
        Event::with_id(
            id,
            format!("Holiday {}", id),
            EventType::Holiday,
            dates::ms(first, 0, 0),
            dates::ms(last + 1, 0, 0) - 1,
        )
        .unwrap()
    }

    /// The three overlapping standups from the packing scenario
    pub fn staggered_morning() -> Vec<Event> {
        vec![
            task("a", 4, (9, 0), (10, 0)),
            task("b", 4, (9, 30), (10, 30)),
            task("c", 4, (10, 0), (11, 0)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::week_start().weekday(), chrono::Weekday::Sun);
        assert_eq!(dates::at(4, 0, 0).date(), dates::may_1_2025());
    }

    #[test]
    fn test_fixture_events_are_valid() {
        assert!(events::staggered_morning().iter().all(|e| e.validate().is_ok()));
        let holiday = events::holiday("h", 1, 3);
        assert_eq!(holiday.event_type, EventType::Holiday);
    }
}
