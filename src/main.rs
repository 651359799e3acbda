// Week Grid
// Command line entry point for inspecting week layouts

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};

use week_grid::models::event::EventType;
use week_grid::models::layout::PositionedEvent;
use week_grid::services::event::draft::EventDraft;
use week_grid::services::settings::{events_path, SettingsService};
use week_grid::utils::date::{hour_labels, to_millis};
use week_grid::{EventSource, EventStore, WeekNavigator};

#[derive(Parser, Debug)]
#[command(name = "week-grid", version, about = "Lay out calendar events on a week grid")]
struct Cli {
    /// Settings file (TOML). Defaults to the per-user config directory.
    #[arg(long, env = "WEEK_GRID_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Events file (JSON array). Overrides the settings value.
    #[arg(long, env = "WEEK_GRID_EVENTS", global = true)]
    events: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the layout of the week containing a date
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print the timed events occupying one grid cell
    Slot {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        hour: u32,
    },
    /// Add a timed event
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, value_enum, default_value_t = Kind::Task)]
        kind: Kind,
        /// Start, e.g. 2025-05-01T09:00
        #[arg(long, value_parser = parse_datetime)]
        start: NaiveDateTime,
        #[arg(long, value_parser = parse_datetime)]
        end: NaiveDateTime,
    },
    /// Add an all-day event
    AddAllDay {
        #[arg(long)]
        title: String,
        #[arg(long, value_enum, default_value_t = Kind::Holiday)]
        kind: Kind,
        #[arg(long)]
        date: NaiveDate,
        /// Last day (inclusive); defaults to the start date
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Delete an event by id
    Delete { id: String },
    /// Print the hour row labels
    Labels,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Task,
    Holiday,
}

impl From<Kind> for EventType {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Task => EventType::Task,
            Kind::Holiday => EventType::Holiday,
        }
    }
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| format!("expected YYYY-MM-DDTHH:MM, got '{}'", value))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting week-grid");

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::from_default_location()?,
    };
    let settings = settings_service.get()?;

    let events_file = match &cli.events {
        Some(path) => path.clone(),
        None => events_path(&settings)?,
    };
    let mut store = EventStore::open(&events_file)
        .with_context(|| format!("failed to open event store {}", events_file.display()))?;

    match cli.command {
        Command::Show { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let mut navigator = WeekNavigator::new(date, &settings);
            navigator.sync_from(&store);
            print_week(&navigator);
        }
        Command::Slot { date, hour } => {
            let mut navigator = WeekNavigator::new(date, &settings);
            navigator.sync_from(&store);
            let day_index = navigator
                .window()
                .index_of(date)
                .ok_or_else(|| anyhow!("{} is not in its own week", date))?;
            for positioned in navigator.layout().events_in_slot(day_index, hour) {
                println!("{}", describe_timed(positioned));
            }
        }
        Command::Add {
            title,
            kind,
            start,
            end,
        } => {
            let event = store.add(title, kind.into(), to_millis(start), to_millis(end))?;
            println!("Added {}", event.id);
        }
        Command::AddAllDay {
            title,
            kind,
            date,
            until,
        } => {
            let mut draft = EventDraft::for_all_day(date, &settings)?;
            draft.title = title;
            draft.event_type = kind.into();
            draft.end_date = until.unwrap_or(date);
            let event = store.save_draft(draft)?;
            println!("Added {}", event.id);
        }
        Command::Delete { id } => {
            let removed = store.delete(&id)?;
            println!("Deleted '{}'", removed.title);
        }
        Command::Labels => {
            for (hour, label) in hour_labels() {
                println!("{:>2}  {}", hour, label);
            }
        }
    }

    log::debug!("{} events in store", store.list().len());
    Ok(())
}

fn print_week(navigator: &WeekNavigator) {
    let window = navigator.window();
    let layout = navigator.layout();
    println!("Week of {} .. {}", window.first_date(), window.last_date());

    println!("All-day ({} rows):", layout.all_day_rows());
    for positioned in layout.all_day_events() {
        let span = positioned.day_span().unwrap_or(0);
        println!(
            "  row {}  days {}..{}  left {:.1}% width {:.1}%  {} [{}]",
            positioned.column + 1,
            positioned.day_index,
            positioned.day_index + span,
            positioned.left,
            positioned.width,
            positioned.event.title,
            positioned.event.event_type.label(),
        );
    }

    for (day_index, date) in window.dates().iter().enumerate() {
        let marker = if navigator.is_today(*date) { " (today)" } else { "" };
        println!("{}{}", date.format("%a %Y-%m-%d"), marker);
        for positioned in layout.timed_events_on_day(day_index) {
            println!("  {}", describe_timed(positioned));
        }
    }
}

fn describe_timed(positioned: &PositionedEvent) -> String {
    let event = &positioned.event;
    format!(
        "{}-{}  top {:.1}% height {:.1}%  col {}/{} left {:.1}% width {:.1}%  {} [{}] {}",
        event.start_time().format("%H:%M"),
        event.end_time().format("%H:%M"),
        positioned.top().unwrap_or(0.0),
        positioned.height().unwrap_or(0.0),
        positioned.column + 1,
        positioned.columns().unwrap_or(1),
        positioned.left,
        positioned.width,
        event.title,
        event.event_type.label(),
        event.id,
    )
}
