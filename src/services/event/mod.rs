//! Calendar event store entry point.
//! Holds the canonical event collection, persists it as JSON and pushes full
//! snapshots to subscribers, organized across focused submodules.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};

use anyhow::Result;
use thiserror::Error;

use crate::models::event::{Event, EventError};

pub mod crud;
pub mod draft;
pub mod persistence;
pub mod queries;

/// Read side of an event store as seen by the week view.
#[cfg_attr(test, mockall::automock)]
pub trait EventSource {
    /// Current list of events.
    fn list(&self) -> Vec<Event>;

    /// Channel receiving a full snapshot after every change. The current
    /// snapshot is delivered immediately.
    fn subscribe(&mut self) -> Receiver<Vec<Event>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    NotFound(String),
    #[error("An event with id {0} already exists")]
    DuplicateId(String),
}

/// In-memory event collection, optionally backed by a JSON file.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
    /// Stored records that failed validation. Hidden from readers but
    /// written back on every commit.
    rejected: Vec<Event>,
    subscribers: Vec<Sender<Vec<Event>>>,
    path: Option<PathBuf>,
}

impl EventStore {
    /// Create an empty store that is not backed by a file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store from already known events
    pub fn with_events(events: Vec<Event>) -> Result<Self, EventError> {
        for event in &events {
            event.validate()?;
        }

        Ok(Self {
            events,
            ..Self::default()
        })
    }

    /// Open a file-backed store. A missing file is seeded with the sample
    /// events and written immediately.
    ///
    /// Stored events that fail validation are left out of the collection but
    /// kept on disk unchanged.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let (events, rejected) = match persistence::load_events(&path)? {
            Some(stored) => {
                let total = stored.len();
                let (valid, rejected): (Vec<Event>, Vec<Event>) =
                    stored.into_iter().partition(|event| match event.validate() {
                        Ok(()) => true,
                        Err(err) => {
                            log::warn!("Skipping stored event {}: {}", event.id, err);
                            false
                        }
                    });
                log::info!(
                    "Loaded {} of {} events from {}",
                    valid.len(),
                    total,
                    path.display()
                );
                (valid, rejected)
            }
            None => {
                let seeded = persistence::initial_events();
                persistence::save_events(&path, &seeded)?;
                log::info!(
                    "Seeded {} sample events into {}",
                    seeded.len(),
                    path.display()
                );
                (seeded, Vec::new())
            }
        };

        Ok(Self {
            events,
            rejected,
            subscribers: Vec::new(),
            path: Some(path),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Stored records skipped by [`EventStore::open`] because they failed
    /// validation.
    pub fn rejected(&self) -> &[Event] {
        &self.rejected
    }

    pub(crate) fn id_in_use(&self, id: &str) -> bool {
        self.events.iter().chain(&self.rejected).any(|e| e.id == id)
    }

    /// Persist `next` (when file-backed), adopt it and notify subscribers.
    /// On a failed write the previous collection is kept.
    pub(crate) fn commit(&mut self, next: Vec<Event>) -> Result<()> {
        if let Some(path) = &self.path {
            if self.rejected.is_empty() {
                persistence::save_events(path, &next)?;
            } else {
                let stored: Vec<Event> = next.iter().chain(&self.rejected).cloned().collect();
                persistence::save_events(path, &stored)?;
            }
        }
        self.events = next;
        self.publish();
        Ok(())
    }

    fn publish(&mut self) {
        let before = self.subscribers.len();
        let snapshot = &self.events;
        self.subscribers
            .retain(|subscriber| subscriber.send(snapshot.clone()).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            log::warn!("Dropped {} disconnected event subscribers", dropped);
        }
    }
}

impl EventSource for EventStore {
    fn list(&self) -> Vec<Event> {
        self.events.clone()
    }

    fn subscribe(&mut self) -> Receiver<Vec<Event>> {
        let (sender, receiver) = mpsc::channel();
        if sender.send(self.events.clone()).is_ok() {
            self.subscribers.push(sender);
        }
        receiver
    }
}
