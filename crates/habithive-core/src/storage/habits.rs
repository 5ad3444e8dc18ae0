//! Habit collection storage.
//!
//! The whole collection lives in memory and is rewritten to a single
//! JSON slot after every mutation. Loading happens exactly once at
//! startup; a mutation that arrives before the initial load does not
//! save, so a half-initialized store can never clobber existing data.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use uuid::Uuid;

use super::data_dir;
use crate::clock::{Clock, SystemClock};
use crate::completion;
use crate::error::{StoreError, ValidationError};
use crate::events::Event;
use crate::habit::{Frequency, Habit, HabitStatus};
use crate::stats::{self, Summary};

const HABITS_FILE: &str = "habits.json";

/// The authoritative in-memory habit collection, synchronized with a
/// JSON storage slot on disk.
///
/// Constructed once per process and passed by reference to the
/// presentation layer. Persistence writes are fire-and-forget: failures
/// are logged, never propagated.
pub struct HabitStore {
    path: PathBuf,
    habits: Vec<Habit>,
    loaded: bool,
    events: Vec<Event>,
    clock: Box<dyn Clock>,
}

impl HabitStore {
    /// Open the store at the default data directory.
    ///
    /// The collection is empty and no save will run until [`load`] has
    /// been called.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    ///
    /// [`load`]: HabitStore::load
    pub fn open() -> Result<Self, StoreError> {
        Ok(Self::with_path(data_dir()?.join(HABITS_FILE)))
    }

    /// Open the store against an explicit storage slot.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, SystemClock)
    }

    /// Open the store with an injected clock.
    pub fn with_clock(path: impl Into<PathBuf>, clock: impl Clock + 'static) -> Self {
        Self {
            path: path.into(),
            habits: Vec::new(),
            loaded: false,
            events: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Read the persisted collection.
    ///
    /// Missing or corrupt data yields an empty collection and never an
    /// error; corruption is logged. Marks the store loaded, which arms
    /// saving.
    pub fn load(&mut self) {
        self.habits = match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(habits) => habits,
                Err(e) => {
                    log::warn!("failed to parse habits from {}: {e}", self.path.display());
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("failed to read habits from {}: {e}", self.path.display());
                Vec::new()
            }
        };
        self.loaded = true;
    }

    /// True until the initial [`load`] has completed.
    ///
    /// [`load`]: HabitStore::load
    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    /// Create a habit from a trimmed, non-empty name.
    ///
    /// Allocates a fresh id and an empty completion set, appends the
    /// record, saves, and records a [`Event::HabitCreated`]. A name that
    /// trims to empty is rejected before any mutation.
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyName`] for an all-whitespace name.
    pub fn create(
        &mut self,
        name: &str,
        description: Option<String>,
        frequency: Frequency,
    ) -> Result<Habit, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let habit = Habit {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            description,
            frequency,
            completed_dates: Default::default(),
            created_at: self.clock.now(),
            color: None,
        };
        self.habits.push(habit.clone());
        self.events.push(Event::HabitCreated {
            habit_id: habit.id.clone(),
            name: habit.name.clone(),
            at: self.clock.now(),
        });
        self.save();
        Ok(habit)
    }

    /// Replace the stored record matching `habit.id`.
    ///
    /// Silent no-op when the id is unknown; returns whether a record was
    /// replaced. Saves either way.
    pub fn update(&mut self, habit: Habit) -> bool {
        let replaced = match self.habits.iter_mut().find(|h| h.id == habit.id) {
            Some(slot) => {
                let id = habit.id.clone();
                *slot = habit;
                self.events.push(Event::HabitUpdated {
                    habit_id: id,
                    at: self.clock.now(),
                });
                true
            }
            None => false,
        };
        self.save();
        replaced
    }

    /// Remove the record with matching id, if present. Idempotent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        let removed = self.habits.len() < before;
        if removed {
            self.events.push(Event::HabitDeleted {
                habit_id: id.to_string(),
                at: self.clock.now(),
            });
        }
        self.save();
        removed
    }

    /// Toggle the clock's today for the habit with `id`.
    ///
    /// Returns the updated record, or `None` when the id is unknown.
    /// This is the only way completions are recorded; arbitrary dates
    /// cannot be toggled through the store.
    pub fn toggle_today(&mut self, id: &str) -> Option<Habit> {
        let today = self.clock.today();
        let now = self.clock.now();
        let result = match self.habits.iter_mut().find(|h| h.id == id) {
            Some(habit) => {
                let completed = completion::toggle_day(habit, today);
                self.events.push(Event::CompletionToggled {
                    habit_id: habit.id.clone(),
                    date: today,
                    completed,
                    at: now,
                });
                Some(habit.clone())
            }
            None => None,
        };
        self.save();
        result
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    /// Completion status of the habit on `date`, defaulting to today.
    /// An unknown id reads as pending.
    pub fn status_on(&self, id: &str, date: Option<NaiveDate>) -> HabitStatus {
        let date = date.unwrap_or_else(|| self.clock.today());
        self.get(id)
            .map(|h| completion::status_on(h, date))
            .unwrap_or(HabitStatus::Pending)
    }

    /// Current streak of the habit ending today. Unknown ids read as 0.
    pub fn streak(&self, id: &str) -> u32 {
        self.get(id)
            .map(|h| completion::streak(h, self.clock.today()))
            .unwrap_or(0)
    }

    /// Sum of recorded completions across the collection.
    pub fn total_completions(&self) -> usize {
        completion::total_completions(&self.habits)
    }

    /// Dashboard summary as of the clock's today.
    pub fn summary(&self) -> Summary {
        stats::summarize(&self.habits, self.clock.today())
    }

    /// Take the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Path of the storage slot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the full collection into the storage slot.
    ///
    /// Gated behind the loaded flag: saving before the initial load
    /// would overwrite existing data with the empty startup state.
    fn save(&self) {
        if !self.loaded {
            log::debug!("skipping save before initial load");
            return;
        }
        let json = match serde_json::to_string_pretty(&self.habits) {
            Ok(json) => json,
            Err(e) => {
                log::error!("failed to serialize habits: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, json) {
            log::error!("failed to write habits to {}: {e}", self.path.display());
        }
    }
}
