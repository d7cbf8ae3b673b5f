//! Habit domain model.
//!
//! # Invariants
//! - `weekly_progress` always has exactly `DAYS_PER_WEEK` slots, Monday first.
//! - Progress is only changed by single-slot toggles or a full reset.

use crate::model::time_based_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable habit identifier.
pub type HabitId = String;

/// Number of progress slots in a habit week.
pub const DAYS_PER_WEEK: usize = 7;

/// Repeating habit tracked once per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    /// CSS-style color string chosen by the user, stored verbatim.
    pub color: String,
    pub weekly_progress: [bool; DAYS_PER_WEEK],
}

impl Habit {
    /// Creates a habit with an id derived from `now` and an empty week.
    pub fn new(name: impl Into<String>, color: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::with_id(time_based_id("habit", now), name, color)
    }

    /// Creates a habit with a caller-provided id and an empty week.
    pub fn with_id(
        id: impl Into<HabitId>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            weekly_progress: [false; DAYS_PER_WEEK],
        }
    }

    /// Flips one weekday slot. Out-of-range indexes are ignored.
    pub fn toggle_day(&mut self, day_index: usize) {
        if let Some(slot) = self.weekly_progress.get_mut(day_index) {
            *slot = !*slot;
        }
    }

    /// Unchecks every weekday.
    pub fn reset_week(&mut self) {
        self.weekly_progress = [false; DAYS_PER_WEEK];
    }

    /// Number of checked weekdays.
    pub fn completed_days(&self) -> u32 {
        self.weekly_progress.iter().filter(|done| **done).count() as u32
    }
}

/// Example habits seeded into a fresh dashboard.
pub fn default_habits() -> Vec<Habit> {
    [
        ("habit-1", "Morning Exercise", "#10b981"),
        ("habit-2", "Read 30 minutes", "#6366f1"),
        ("habit-3", "Drink 8 glasses of water", "#3b82f6"),
        ("habit-4", "Meditation", "#8b5cf6"),
        ("habit-5", "No social media before noon", "#f59e0b"),
    ]
    .into_iter()
    .map(|(id, name, color)| Habit::with_id(id, name, color))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::{default_habits, Habit};
    use chrono::Utc;

    #[test]
    fn toggle_day_ignores_out_of_range_index() {
        let mut habit = Habit::new("Walk", "#000000", Utc::now());
        habit.toggle_day(7);
        assert_eq!(habit.completed_days(), 0);

        habit.toggle_day(0);
        habit.toggle_day(6);
        assert_eq!(habit.completed_days(), 2);
    }

    #[test]
    fn defaults_seed_five_unchecked_habits() {
        let habits = default_habits();
        assert_eq!(habits.len(), 5);
        assert!(habits.iter().all(|habit| habit.completed_days() == 0));
        assert_eq!(habits[0].id, "habit-1");
    }
}
