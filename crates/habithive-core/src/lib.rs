//! # Habit Hive Core Library
//!
//! This library provides the core business logic for the Habit Hive
//! habit tracker. It implements a CLI-first philosophy where all
//! operations are available via a standalone CLI binary, which is a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Habit Store**: the authoritative in-memory habit collection,
//!   rewritten to a single JSON storage slot after every mutation
//! - **Completion Engine**: pure day-level rules for toggling
//!   completions, deriving status, and computing streaks
//! - **Events**: every store mutation records an event; the presentation
//!   layer drains them and decides which to surface
//!
//! ## Key Components
//!
//! - [`HabitStore`]: habit collection with load/save persistence
//! - [`completion`]: referentially transparent completion and streak math
//! - [`Config`]: TOML-based application configuration
//! - [`Clock`]: injectable time source so "today" is fixable in tests

pub mod clock;
pub mod completion;
pub mod error;
pub mod events;
pub mod habit;
pub mod stats;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, CoreError, StoreError, ValidationError};
pub use events::Event;
pub use habit::{Frequency, Habit, HabitStatus};
pub use stats::Summary;
pub use storage::{data_dir, Config, HabitStore};
