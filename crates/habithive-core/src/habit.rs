//! Habit entity types.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// How often a habit is meant to be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Daily => write!(f, "daily"),
            Frequency::Weekly => write!(f, "weekly"),
        }
    }
}

/// Completion state of a habit on a specific day. Derived, never stored.
///
/// `Missed` is reserved: the status query only ever reports `Complete`
/// or `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    Complete,
    Missed,
    Pending,
}

impl fmt::Display for HabitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HabitStatus::Complete => write!(f, "complete"),
            HabitStatus::Missed => write!(f, "missed"),
            HabitStatus::Pending => write!(f, "pending"),
        }
    }
}

/// A tracked recurring routine.
///
/// `completed_dates` holds one entry per calendar day the habit was
/// performed; the set type keeps entries unique and sorted. Days are
/// serialized as ISO `YYYY-MM-DD` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub frequency: Frequency,
    pub completed_dates: BTreeSet<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub color: Option<String>,
}

impl Habit {
    /// Whether a completion is recorded for `day`.
    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        self.completed_dates.contains(&day)
    }
}
