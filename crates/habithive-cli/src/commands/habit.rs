//! Habit management commands for CLI.

use chrono::NaiveDate;
use clap::Subcommand;
use habithive_core::{Config, Event, Frequency, HabitStore};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Create {
        /// Habit name
        name: String,
        /// Habit description
        #[arg(long)]
        description: Option<String>,
        /// Frequency: daily or weekly (default from config)
        #[arg(long)]
        frequency: Option<String>,
    },
    /// List habits
    List {
        /// Filter by frequency (daily or weekly)
        #[arg(long)]
        frequency: Option<String>,
        /// Sort by current streak, highest first
        #[arg(long)]
        by_streak: bool,
    },
    /// Get habit details
    Get {
        /// Habit ID
        id: String,
    },
    /// Update a habit
    Update {
        /// Habit ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New frequency
        #[arg(long)]
        frequency: Option<String>,
        /// New display color
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
    /// Toggle today's completion
    Toggle {
        /// Habit ID
        id: String,
    },
    /// Current consecutive-day streak
    Streak {
        /// Habit ID
        id: String,
    },
    /// Completion status for a date
    Status {
        /// Habit ID
        id: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = HabitStore::open()?;
    store.load();
    let config = Config::load_or_default();

    match action {
        HabitAction::Create {
            name,
            description,
            frequency,
        } => {
            let frequency = match frequency {
                Some(f) => parse_frequency(&f)?,
                None => config.tracking.default_frequency,
            };
            let habit = store.create(&name, description, frequency)?;
            notify(&mut store, &config);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List {
            frequency,
            by_streak,
        } => {
            let filter = frequency.map(|f| parse_frequency(&f)).transpose()?;
            let mut habits: Vec<_> = store
                .habits()
                .iter()
                .filter(|h| filter.map_or(true, |f| h.frequency == f))
                .cloned()
                .collect();
            if by_streak {
                habits.sort_by(|a, b| store.streak(&b.id).cmp(&store.streak(&a.id)));
            }
            println!("{}", serde_json::to_string_pretty(&habits)?);
        }
        HabitAction::Get { id } => match store.get(&id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => {
                eprintln!("habit not found: {id}");
                std::process::exit(1);
            }
        },
        HabitAction::Update {
            id,
            name,
            description,
            frequency,
            color,
        } => {
            let Some(mut habit) = store.get(&id).cloned() else {
                eprintln!("habit not found: {id}");
                std::process::exit(1);
            };
            if let Some(name) = name {
                habit.name = name.trim().to_string();
            }
            if let Some(description) = description {
                habit.description = Some(description);
            }
            if let Some(frequency) = frequency {
                habit.frequency = parse_frequency(&frequency)?;
            }
            if let Some(color) = color {
                habit.color = Some(color);
            }
            store.update(habit.clone());
            notify(&mut store, &config);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::Delete { id } => {
            store.delete(&id);
            notify(&mut store, &config);
        }
        HabitAction::Toggle { id } => match store.toggle_today(&id) {
            Some(habit) => {
                notify(&mut store, &config);
                println!("{}", serde_json::to_string_pretty(&habit)?);
            }
            None => {
                eprintln!("habit not found: {id}");
                std::process::exit(1);
            }
        },
        HabitAction::Streak { id } => {
            println!("{}", store.streak(&id));
        }
        HabitAction::Status { id, date } => {
            println!("{}", store.status_on(&id, date));
        }
    }
    Ok(())
}

fn parse_frequency(value: &str) -> Result<Frequency, Box<dyn std::error::Error>> {
    match value {
        "daily" => Ok(Frequency::Daily),
        "weekly" => Ok(Frequency::Weekly),
        other => Err(format!("unknown frequency: {other} (expected daily or weekly)").into()),
    }
}

/// Render notification lines for the drained store events.
/// Completion toggles stay silent.
fn notify(store: &mut HabitStore, config: &Config) {
    let events = store.drain_events();
    if !config.notifications.enabled {
        return;
    }
    for event in events {
        match event {
            Event::HabitCreated { .. } => eprintln!("Habit created!"),
            Event::HabitUpdated { .. } => eprintln!("Habit updated!"),
            Event::HabitDeleted { .. } => eprintln!("Habit deleted!"),
            Event::CompletionToggled { .. } => {}
        }
    }
}
