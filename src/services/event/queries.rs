use super::EventStore;
use crate::models::event::Event;

impl EventStore {
    /// Look up an event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Every event ordered by start, ties by id.
    pub fn list_all(&self) -> Vec<Event> {
        let mut events = self.events.clone();
        events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        events
    }

    /// Events intersecting `[start, end)` in insertion order.
    pub fn find_by_date_range(&self, start: i64, end: i64) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.start < end && e.end > start)
            .collect()
    }

    /// Case-insensitive title search.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return vec![];
        }

        self.events
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&query))
            .collect()
    }
}
