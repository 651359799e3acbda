//! Week navigation and recomputation of the visible layout.

use std::sync::mpsc::Receiver;

use chrono::{Local, NaiveDate};

use crate::models::event::Event;
use crate::models::layout::WeekWindow;
use crate::models::settings::Settings;
use crate::services::event::EventSource;
use crate::services::layout::{LayoutOptions, WeekLayout};
use crate::utils::date::add_days;

/// Current week, latest event snapshot and the layout derived from both.
///
/// Every navigation or snapshot replaces the layout wholesale.
#[derive(Debug, Clone)]
pub struct WeekNavigator {
    current_date: NaiveDate,
    first_day_of_week: u8,
    options: LayoutOptions,
    events: Vec<Event>,
    window: WeekWindow,
    layout: WeekLayout,
}

impl WeekNavigator {
    pub fn new(current_date: NaiveDate, settings: &Settings) -> Self {
        let window = WeekWindow::with_first_day(current_date, settings.first_day_of_week);
        let options = LayoutOptions::from(settings);
        Self {
            current_date,
            first_day_of_week: settings.first_day_of_week,
            options,
            events: Vec::new(),
            window,
            layout: WeekLayout::compute(&[], &window, &options),
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn window(&self) -> &WeekWindow {
        &self.window
    }

    pub fn layout(&self) -> &WeekLayout {
        &self.layout
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn previous_week(&mut self) {
        self.go_to(add_days(self.current_date, -7));
    }

    pub fn next_week(&mut self) {
        self.go_to(add_days(self.current_date, 7));
    }

    pub fn go_to_today(&mut self) {
        self.go_to(Local::now().date_naive());
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.window = WeekWindow::with_first_day(date, self.first_day_of_week);
        log::info!(
            "Showing week {} - {}",
            self.window.first_date(),
            self.window.last_date()
        );
        self.recompute();
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == Local::now().date_naive()
    }

    /// Replace the event snapshot and recompute.
    pub fn apply_snapshot(&mut self, events: Vec<Event>) {
        self.events = events;
        self.recompute();
    }

    /// Pull the current list from `source`.
    pub fn sync_from<S: EventSource + ?Sized>(&mut self, source: &S) {
        self.apply_snapshot(source.list());
    }

    /// Apply the most recent pending snapshot, skipping superseded ones.
    /// Returns whether anything was applied.
    pub fn drain(&mut self, receiver: &Receiver<Vec<Event>>) -> bool {
        match receiver.try_iter().last() {
            Some(snapshot) => {
                self.apply_snapshot(snapshot);
                true
            }
            None => false,
        }
    }

    fn recompute(&mut self) {
        self.layout = WeekLayout::compute(&self.events, &self.window, &self.options);
    }
}
