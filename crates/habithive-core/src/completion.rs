//! Day-level completion rules: toggling, status, streaks, totals.
//!
//! Every function takes its reference date explicitly; nothing in this
//! module reads the wall clock. Given a habit and a date the results are
//! referentially transparent.

use chrono::{Days, NaiveDate};

use crate::habit::{Habit, HabitStatus};

/// Upper bound on the backward streak walk, in days.
const STREAK_WINDOW_DAYS: u64 = 366;

/// Flip the completion flag for `day`.
///
/// Removes the day when it is already recorded, inserts it otherwise.
/// Returns whether the day is completed after the toggle. Applying this
/// twice with the same day restores the original set.
pub fn toggle_day(habit: &mut Habit, day: NaiveDate) -> bool {
    if habit.completed_dates.remove(&day) {
        false
    } else {
        habit.completed_dates.insert(day);
        true
    }
}

/// Completion status of `habit` on `date`.
pub fn status_on(habit: &Habit, date: NaiveDate) -> HabitStatus {
    if habit.is_completed_on(date) {
        HabitStatus::Complete
    } else {
        HabitStatus::Pending
    }
}

/// Current consecutive-day streak ending at `today`.
///
/// Today itself may still be pending without breaking the run, but once
/// a full day has elapsed without a completion the streak is 0. The walk
/// never looks further back than [`STREAK_WINDOW_DAYS`].
pub fn streak(habit: &Habit, today: NaiveDate) -> u32 {
    if habit.completed_dates.is_empty() {
        return 0;
    }

    let completed_recently = habit.is_completed_on(today)
        || today
            .checked_sub_days(Days::new(1))
            .is_some_and(|yesterday| habit.is_completed_on(yesterday));
    if !completed_recently {
        return 0;
    }

    let mut count = 0;
    for offset in 0..STREAK_WINDOW_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if habit.is_completed_on(day) {
            count += 1;
        } else if offset > 0 {
            break;
        }
        // offset 0: today may be pending without ending the run
    }
    count
}

/// Sum of recorded completions across `habits`.
pub fn total_completions<'a, I>(habits: I) -> usize
where
    I: IntoIterator<Item = &'a Habit>,
{
    habits.into_iter().map(|h| h.completed_dates.len()).sum()
}
