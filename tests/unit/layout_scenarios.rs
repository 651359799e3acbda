// Scenario tests for the week layout engine
// Each case builds a small snapshot and checks the rendered geometry

#[path = "../fixtures/mod.rs"]
mod fixtures;

use fixtures::{dates, events};
use pretty_assertions::assert_eq;
use test_case::test_case;
use week_grid::models::event::{Event, EventType};
use week_grid::services::layout::all_day::day_span;
use week_grid::services::layout::{events_in_window, is_all_day};
use week_grid::{LayoutOptions, WeekLayout, WeekWindow};

fn window() -> WeekWindow {
    WeekWindow::containing(dates::may_1_2025())
}

fn layout(events: &[Event]) -> WeekLayout {
    WeekLayout::compute(events, &window(), &LayoutOptions::default())
}

fn raw(id: &str, start: i64, end: i64) -> Event {
    Event::with_id(id, id, EventType::Task, start, end).unwrap()
}

#[test]
fn test_week_window_runs_sunday_to_saturday() {
    let window = window();
    assert_eq!(window.first_date(), dates::week_start());
    assert_eq!(window.last_date(), dates::at(6, 0, 0).date());
    assert_eq!(window.end_millis() - window.start_millis(), 7 * 86_400_000 - 1);
}

#[test_case(0, 0 ; "midnight start")]
#[test_case(9, 0 ; "morning start")]
#[test_case(23, 59 ; "last minute start")]
fn test_full_day_duration_is_all_day(hour: u32, minute: u32) {
    let start = dates::ms(2, hour, minute);
    assert!(is_all_day(&raw("x", start, start + 86_400_000)));
    assert!(is_all_day(&raw("x", start, start + 86_399_000)));
}

#[test]
fn test_duration_threshold_boundary() {
    let start = dates::ms(2, 9, 0);
    assert!(!is_all_day(&raw("x", start, start + 86_398_999)));
    assert!(is_all_day(&raw("x", start, start + 86_399_000)));
}

#[test]
fn test_midnight_to_last_minute_is_all_day() {
    let start = dates::ms(4, 0, 0);
    assert!(is_all_day(&raw("x", start, dates::ms(4, 23, 59))));
    assert!(!is_all_day(&raw("x", start, dates::ms(4, 23, 58))));
}

#[test]
fn test_filter_excludes_events_outside_week() {
    let window = window();
    let before = raw("before", dates::ms(-1, 9, 0), dates::ms(0, 0, 0));
    let after = raw("after", dates::ms(7, 0, 0), dates::ms(7, 1, 0));
    let straddling = raw("straddling", dates::ms(-1, 22, 0), dates::ms(0, 1, 0));

    let snapshot = vec![before, after, straddling];
    let kept: Vec<&str> = events_in_window(&snapshot, &window)
        .iter()
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(kept, vec!["straddling"]);
}

#[test_case(1, 3, 1, 3 ; "monday to wednesday")]
#[test_case(0, 6, 0, 7 ; "whole week")]
#[test_case(-3, 1, 0, 2 ; "starts before the window")]
#[test_case(5, 9, 5, 2 ; "ends after the window")]
#[test_case(-3, 9, 0, 7 ; "covers the window")]
fn test_all_day_span(first: i64, last: i64, start_index: usize, span: usize) {
    let event = events::holiday("h", first, last);
    let result = day_span(&event, &window());
    assert_eq!(
        (result.start_day_index, result.day_span),
        (start_index, span)
    );
}

#[test]
fn test_all_day_events_stack_on_shared_days() {
    let layout = layout(&[
        events::holiday("trip", 1, 3),
        events::holiday("bank", 2, 2),
        events::holiday("later", 4, 5),
    ]);

    let rows: Vec<(&str, usize, usize)> = layout
        .all_day_events()
        .iter()
        .map(|p| (p.id(), p.day_index, p.column))
        .collect();
    assert_eq!(rows, vec![("trip", 1, 0), ("bank", 2, 1), ("later", 4, 0)]);
    assert_eq!(layout.all_day_rows(), 2);

    let on_tuesday: Vec<&str> = layout
        .all_day_events_on_day(2)
        .iter()
        .map(|p| p.id())
        .collect();
    assert_eq!(on_tuesday, vec!["trip", "bank"]);
    assert!(layout.timed_events().is_empty());
}

#[test]
fn test_staggered_events_pack_into_two_columns() {
    let layout = layout(&events::staggered_morning());
    let packed: Vec<(&str, usize, Option<usize>)> = layout
        .timed_events_on_day(4)
        .map(|p| (p.id(), p.column, p.columns()))
        .collect();

    assert_eq!(
        packed,
        vec![("a", 0, Some(2)), ("b", 1, Some(2)), ("c", 0, Some(2))]
    );

    let second = &layout.timed_events()[1];
    assert_eq!(second.width, 47.0);
    assert_eq!(second.left, 48.0);
    assert_eq!(second.z_index, 2);
}

#[test]
fn test_crowded_day_fits_the_track() {
    let crowd: Vec<Event> = (0..120)
        .map(|i| events::task(&format!("m{:03}", i), 4, (9, 0), (10, 0)))
        .collect();
    let layout = layout(&crowd);

    assert_eq!(layout.timed_events().len(), 120);
    assert!(layout.timed_events().iter().all(|p| p.columns() == Some(120)));
    let right_edge = layout
        .timed_events()
        .iter()
        .map(|p| p.left + p.width)
        .fold(0.0, f64::max);
    assert!(right_edge <= 95.0 + 1e-9);
    assert!(layout.timed_events().iter().all(|p| p.left >= 0.0));
}

#[test]
fn test_separate_days_do_not_share_columns() {
    let layout = layout(&[
        events::task("mon", 1, (9, 0), (10, 0)),
        events::task("tue", 2, (9, 0), (10, 0)),
    ]);
    assert!(layout
        .timed_events()
        .iter()
        .all(|p| p.column == 0 && p.columns() == Some(1) && p.width == 95.0));
}

#[test]
fn test_timed_geometry() {
    let layout = layout(&[events::task("lunch", 3, (12, 0), (13, 30))]);
    let lunch = &layout.timed_events()[0];
    assert_eq!(lunch.day_index, 3);
    assert_eq!(lunch.top(), Some(50.0));
    assert_eq!(lunch.height(), Some(6.25));
}

#[test]
fn test_zero_length_event_renders_at_min_height() {
    let options = LayoutOptions::default();
    let layout = layout(&[events::task("ping", 2, (8, 0), (8, 0))]);
    let ping = &layout.timed_events()[0];
    assert_eq!(ping.height(), Some(options.min_height));
    assert_eq!(layout.events_in_slot(2, 8).len(), 1);
}

#[test]
fn test_cross_midnight_event_clamped_to_start_day() {
    let event = raw("late", dates::ms(2, 22, 0), dates::ms(3, 2, 0));
    let layout = layout(&[event]);

    let late = &layout.timed_events()[0];
    assert_eq!(late.day_index, 2);
    let top = late.top().unwrap();
    let height = late.height().unwrap();
    assert!((top + height - 100.0).abs() < 0.1);
    assert_eq!(layout.timed_events_on_day(3).count(), 0);
}

#[test]
fn test_slot_query_and_idempotence() {
    let layout = layout(&events::staggered_morning());

    let slot_ids = |hour| -> Vec<String> {
        let mut ids: Vec<String> = layout
            .events_in_slot(4, hour)
            .iter()
            .map(|p| p.id().to_string())
            .collect();
        ids.sort();
        ids
    };

    assert_eq!(slot_ids(9), vec!["a", "b"]);
    assert_eq!(slot_ids(10), vec!["b", "c"]);
    assert_eq!(slot_ids(10), slot_ids(10));
    assert!(slot_ids(12).is_empty());
    assert!(layout.events_in_slot(9, 10).is_empty());
    assert!(layout.events_in_slot(4, 24).is_empty());
}

#[test]
fn test_mixed_week() {
    let mut snapshot = events::staggered_morning();
    snapshot.push(events::holiday("trip", 1, 3));
    snapshot.push(raw("elsewhere", dates::ms(14, 9, 0), dates::ms(14, 10, 0)));

    let layout = layout(&snapshot);
    assert_eq!(layout.all_day_events().len(), 1);
    assert_eq!(layout.timed_events().len(), 3);
    assert!(layout.all_day_events()[0].is_all_day());
    assert_eq!(layout.all_day_events()[0].day_span(), Some(3));
}
