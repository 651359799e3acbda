// Week Grid Library
// Exports all modules for testing and reuse

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventType};
pub use models::layout::{Placement, PositionedEvent, WeekWindow};
pub use models::settings::Settings;
pub use services::event::{EventSource, EventStore};
pub use services::layout::{LayoutOptions, WeekLayout};
pub use services::week::WeekNavigator;
