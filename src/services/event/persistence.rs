//! JSON file persistence for the event collection.
//!
//! The file holds a single JSON array of events.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Error as SerdeError;
use uuid::Uuid;

use crate::models::event::{Event, EventType};

/// Load events from `path`. Returns `None` when the file does not exist yet.
pub fn load_events(path: &Path) -> Result<Option<Vec<Event>>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read events from {}", path.display()))?;
    let events = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(Some(events))
}

pub fn save_events(path: &Path, events: &[Event]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(events)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write events to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize events from {}",
        path.display()
    ))
}

const INITIAL_EVENTS: [(&str, EventType, i64, i64); 15] = [
    ("My Task 1", EventType::Task, 1_745_901_600_000, 1_745_905_200_000),
    ("My Task 2", EventType::Task, 1_745_988_000_000, 1_745_991_600_000),
    ("My Task 3", EventType::Task, 1_746_074_400_000, 1_746_078_000_000),
    ("My Task 4", EventType::Task, 1_746_160_800_000, 1_746_164_400_000),
    ("My Task 5", EventType::Task, 1_746_247_200_000, 1_746_250_800_000),
    ("My Task 6", EventType::Task, 1_746_333_600_000, 1_746_337_200_000),
    ("My Task 7", EventType::Task, 1_746_420_000_000, 1_746_423_600_000),
    ("My Task 8", EventType::Task, 1_746_506_400_000, 1_746_510_000_000),
    ("My Task 9", EventType::Task, 1_746_592_800_000, 1_746_596_400_000),
    ("My Task 10", EventType::Task, 1_746_679_200_000, 1_746_682_800_000),
    ("My Task 11", EventType::Task, 1_746_765_600_000, 1_746_769_200_000),
    ("My Task 12", EventType::Task, 1_746_852_000_000, 1_746_855_600_000),
    ("My Task 13", EventType::Holiday, 1_746_506_400_000, 1_746_513_600_000),
    ("My Task 14", EventType::Task, 1_746_938_400_000, 1_746_942_000_000),
    ("My Task 15", EventType::Holiday, 1_746_765_600_000, 1_746_772_800_000),
];

/// Sample events used to seed a fresh store, each with a new id.
pub fn initial_events() -> Vec<Event> {
    INITIAL_EVENTS
        .iter()
        .map(|(title, event_type, start, end)| Event {
            id: Uuid::new_v4().to_string(),
            title: (*title).to_string(),
            event_type: *event_type,
            start: *start,
            end: *end,
        })
        .collect()
}
