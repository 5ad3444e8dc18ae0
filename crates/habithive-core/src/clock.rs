//! Injectable time source.
//!
//! The store and the CLI only ever ask a [`Clock`] for the current
//! instant and calendar day, so tests can pin "today" instead of
//! depending on real execution time.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Utc};

/// Source of the current instant and the current calendar day.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// The current calendar day in the system timezone.
    fn today(&self) -> NaiveDate;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pin the clock to the start of `day`.
    pub fn on(day: NaiveDate) -> Self {
        Self {
            now: day.and_time(NaiveTime::MIN).and_utc(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }
}
