use super::draft::EventDraft;
use super::{EventStore, StoreError};
use crate::models::event::{Event, EventType};
use anyhow::Result;

impl EventStore {
    /// Create a new event with a generated id and store it.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        event_type: EventType,
        start: i64,
        end: i64,
    ) -> Result<Event> {
        let event = Event::new(title, event_type, start, end)?;
        self.insert(event.clone())?;
        Ok(event)
    }

    /// Store a fully formed event. Its id must not be in use.
    pub fn insert(&mut self, event: Event) -> Result<()> {
        event.validate()?;
        if self.id_in_use(&event.id) {
            return Err(StoreError::DuplicateId(event.id).into());
        }

        log::info!("Adding event {} '{}'", event.id, event.title);
        let mut next = self.events.clone();
        next.push(event);
        self.commit(next)
    }

    /// Replace the stored event with the same id.
    pub fn update(&mut self, event: Event) -> Result<()> {
        event.validate()?;
        let index = self
            .events
            .iter()
            .position(|e| e.id == event.id)
            .ok_or_else(|| StoreError::NotFound(event.id.clone()))?;

        log::info!("Updating event {} '{}'", event.id, event.title);
        let mut next = self.events.clone();
        next[index] = event;
        self.commit(next)
    }

    /// Remove an event by id, returning it.
    pub fn delete(&mut self, id: &str) -> Result<Event> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut next = self.events.clone();
        let removed = next.remove(index);
        log::info!("Deleting event {} '{}'", removed.id, removed.title);
        self.commit(next)?;
        Ok(removed)
    }

    /// Validate a draft and create or update the event it describes.
    pub fn save_draft(&mut self, draft: EventDraft) -> Result<Event> {
        let is_edit = draft.is_edit();
        let event = draft.into_event()?;
        if is_edit {
            self.update(event.clone())?;
        } else {
            self.insert(event.clone())?;
        }
        Ok(event)
    }
}
