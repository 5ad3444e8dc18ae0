//! Aggregate statistics over the habit collection.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::completion;
use crate::habit::Habit;

/// Dashboard summary derived from the current collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_habits: usize,
    pub total_completions: usize,
    pub completed_today: usize,
    pub highest_streak: u32,
}

/// Compute the summary for `habits` as of `today`.
pub fn summarize(habits: &[Habit], today: NaiveDate) -> Summary {
    Summary {
        total_habits: habits.len(),
        total_completions: completion::total_completions(habits),
        completed_today: habits.iter().filter(|h| h.is_completed_on(today)).count(),
        highest_streak: habits
            .iter()
            .map(|h| completion::streak(h, today))
            .max()
            .unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, Utc};

    use super::*;
    use crate::habit::Frequency;

    fn habit(id: &str, days: &[u64], today: NaiveDate) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("habit {id}"),
            description: None,
            frequency: Frequency::Daily,
            completed_dates: days
                .iter()
                .map(|o| today.checked_sub_days(Days::new(*o)).unwrap())
                .collect(),
            created_at: Utc::now(),
            color: None,
        }
    }

    #[test]
    fn empty_collection_summarizes_to_zero() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let summary = summarize(&[], today);
        assert_eq!(
            summary,
            Summary {
                total_habits: 0,
                total_completions: 0,
                completed_today: 0,
                highest_streak: 0,
            }
        );
    }

    #[test]
    fn summary_aggregates_across_habits() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let habits = vec![
            habit("a", &[0, 1, 2], today),
            habit("b", &[1], today),
            habit("c", &[5], today),
        ];

        let summary = summarize(&habits, today);
        assert_eq!(summary.total_habits, 3);
        assert_eq!(summary.total_completions, 5);
        assert_eq!(summary.completed_today, 1);
        assert_eq!(summary.highest_streak, 3);
    }
}
