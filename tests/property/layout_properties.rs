// Property-based tests for the week layout engine
// Random snapshots around one fixed week, checked against geometric invariants

use chrono::NaiveDate;
use proptest::prelude::*;
use week_grid::models::event::{Event, EventType};
use week_grid::services::layout::{events_in_window, is_all_day};
use week_grid::utils::date::date_start_millis;
use week_grid::{LayoutOptions, WeekLayout, WeekWindow};

const MINUTE: i64 = 60_000;

fn window() -> WeekWindow {
    WeekWindow::containing(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
}

/// Events starting anywhere from a week before to a week after the window,
/// lasting up to two days.
fn event_strategy() -> impl Strategy<Value = Event> {
    let origin = window().start_millis() - 7 * 1_440 * MINUTE;
    (0..21 * 1_440i64, 0..2 * 1_440i64, any::<bool>()).prop_map(
        move |(start_minute, duration_minutes, holiday)| {
            let start = origin + start_minute * MINUTE;
            let event_type = if holiday {
                EventType::Holiday
            } else {
                EventType::Task
            };
            Event {
                id: format!("{}-{}", start_minute, duration_minutes),
                title: "Generated".to_string(),
                event_type,
                start,
                end: start + duration_minutes * MINUTE,
            }
        },
    )
}

/// Timed events confined to the morning of one day, positive length only.
fn same_day_strategy() -> impl Strategy<Value = Vec<Event>> {
    let day = date_start_millis(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
    prop::collection::vec((0..12 * 60i64, 1..6 * 60i64), 1..12).prop_map(move |spans| {
        spans
            .into_iter()
            .enumerate()
            .map(|(i, (start, length))| Event {
                id: format!("e{:02}", i),
                title: "Generated".to_string(),
                event_type: EventType::Task,
                start: day + start * MINUTE,
                end: day + (start + length) * MINUTE,
            })
            .collect()
    })
}

proptest! {
    /// Property: events entirely outside the week are never kept
    #[test]
    fn prop_filter_excludes_outside_events(events in prop::collection::vec(event_strategy(), 0..30)) {
        let window = window();
        for kept in events_in_window(&events, &window) {
            prop_assert!(kept.start < window.end_millis());
            prop_assert!(kept.end > window.start_millis());
        }
    }

    /// Property: timed blocks stay inside the column and respect the minimum height
    #[test]
    fn prop_timed_geometry_in_bounds(events in prop::collection::vec(event_strategy(), 0..30)) {
        let options = LayoutOptions::default();
        let layout = WeekLayout::compute(&events, &window(), &options);

        for positioned in layout.timed_events() {
            let top = positioned.top().unwrap();
            let height = positioned.height().unwrap();
            prop_assert!((0.0..=100.0).contains(&top));
            prop_assert!(height >= options.min_height);
            prop_assert!(top + height <= 100.0 + options.min_height);
            prop_assert!(!is_all_day(&positioned.event));
            prop_assert!(positioned.left >= 0.0);
            prop_assert!(positioned.left + positioned.width <= 100.0 + 1e-9);
        }

        for positioned in layout.all_day_events() {
            prop_assert!(positioned.day_index + positioned.day_span().unwrap() <= 7);
            prop_assert!(positioned.left >= 0.0);
            prop_assert!(positioned.left + positioned.width <= 100.0 + 1e-9);
        }
    }

    /// Property: crowded days keep every column inside the day
    #[test]
    fn prop_crowded_day_stays_in_bounds(count in 1..160usize, offsets in prop::collection::vec(0..30i64, 160)) {
        let day = date_start_millis(NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
        let events: Vec<Event> = (0..count)
            .map(|i| Event {
                id: format!("c{:03}", i),
                title: "Crowded".to_string(),
                event_type: EventType::Task,
                start: day + (9 * 60 + offsets[i]) * MINUTE,
                end: day + (11 * 60) * MINUTE,
            })
            .collect();

        let options = LayoutOptions::default();
        let layout = WeekLayout::compute(&events, &window(), &options);
        prop_assert_eq!(layout.timed_events().len(), count);
        for positioned in layout.timed_events() {
            prop_assert_eq!(positioned.columns(), Some(count));
            prop_assert!(positioned.left >= 0.0);
            prop_assert!(positioned.width >= 0.0);
            prop_assert!(positioned.left + positioned.width <= options.track.width + 1e-9);
        }
    }

    /// Property: events sharing a column never overlap in time
    #[test]
    fn prop_no_overlap_within_column(events in prop::collection::vec(event_strategy(), 0..30)) {
        let layout = WeekLayout::compute(&events, &window(), &LayoutOptions::default());
        let timed = layout.timed_events();

        for (i, a) in timed.iter().enumerate() {
            for b in &timed[i + 1..] {
                if a.day_index == b.day_index && a.column == b.column {
                    let overlaps = a.event.start < b.event.end && b.event.start < a.event.end;
                    prop_assert!(!overlaps, "{} and {} share column {}", a.id(), b.id(), a.column);
                }
            }
        }
    }

    /// Property: the column count equals the peak number of concurrent events
    #[test]
    fn prop_columns_match_peak_concurrency(events in same_day_strategy()) {
        let layout = WeekLayout::compute(&events, &window(), &LayoutOptions::default());

        let peak = events
            .iter()
            .map(|sample| {
                events
                    .iter()
                    .filter(|e| e.start <= sample.start && sample.start < e.end)
                    .count()
            })
            .max()
            .unwrap_or(0);

        for positioned in layout.timed_events() {
            prop_assert_eq!(positioned.columns(), Some(peak));
        }
    }

    /// Property: repeated slot queries over the same layout agree
    #[test]
    fn prop_slot_query_idempotent(
        events in prop::collection::vec(event_strategy(), 0..30),
        day in 0..7usize,
        hour in 0..24u32,
    ) {
        let layout = WeekLayout::compute(&events, &window(), &LayoutOptions::default());
        let first: Vec<&str> = layout.events_in_slot(day, hour).iter().map(|p| p.id()).collect();
        let second: Vec<&str> = layout.events_in_slot(day, hour).iter().map(|p| p.id()).collect();
        prop_assert_eq!(first, second);
    }

    /// Property: recomputing from the same snapshot yields the same layout
    #[test]
    fn prop_layout_deterministic(events in prop::collection::vec(event_strategy(), 0..30)) {
        let options = LayoutOptions::default();
        let first = WeekLayout::compute(&events, &window(), &options);
        let mut reversed = events.clone();
        reversed.reverse();
        let second = WeekLayout::compute(&reversed, &window(), &options);
        prop_assert_eq!(first, second);
    }
}
