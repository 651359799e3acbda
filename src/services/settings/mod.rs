//! Settings persistence.

mod service;

pub use service::{events_path, SettingsService};
