//! Store mutation events.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Every successful store mutation records an Event. The presentation
/// layer drains them after each command and decides which to surface;
/// completion toggles are recorded but never rendered as notifications.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    HabitCreated {
        habit_id: String,
        name: String,
        at: DateTime<Utc>,
    },
    HabitUpdated {
        habit_id: String,
        at: DateTime<Utc>,
    },
    HabitDeleted {
        habit_id: String,
        at: DateTime<Utc>,
    },
    CompletionToggled {
        habit_id: String,
        date: NaiveDate,
        completed: bool,
        at: DateTime<Utc>,
    },
}
