//! Completion projections derived from a dashboard snapshot.
//!
//! # Responsibility
//! - Compute per-unit and per-collection completion rates.
//! - Compute weekly habit progress.
//! - Select the projection set for the active task view.
//!
//! # Invariants
//! - Every function is pure: same state in, same output out.
//! - Overall rates sum counts first and divide once; they are not the mean
//!   of per-unit percentages.
//! - Only the fixed units of a collection are read (month days `1..=30`).

use crate::model::dashboard::DashboardState;
use crate::model::habit::{Habit, DAYS_PER_WEEK};
use crate::model::task::Task;
use crate::model::units::{TaskCollection, TaskUnit, TaskViewMode};
use serde::Serialize;
use std::collections::BTreeMap;

/// Done/total counts with a rounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CompletionRate {
    pub total: u32,
    pub completed: u32,
    /// `round(completed / total * 100)`, or `0` when `total == 0`.
    pub percentage: u8,
}

impl CompletionRate {
    pub fn from_counts(total: u32, completed: u32) -> Self {
        Self {
            total,
            completed,
            percentage: rounded_percentage(completed, total),
        }
    }

    pub fn of_tasks(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|task| task.completed).count();
        Self::from_counts(tasks.len() as u32, completed as u32)
    }
}

/// Rounds `part / whole * 100` half-up, clamped to `0..=100`.
///
/// Integer form of `floor(part * 100 / whole + 0.5)`.
pub fn rounded_percentage(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let whole = u64::from(whole);
    let scaled = (u64::from(part) * 200 + whole) / (2 * whole);
    scaled.min(100) as u8
}

/// Habit with its weekly completion summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitProgress {
    #[serde(flatten)]
    pub habit: Habit,
    pub completed_days: u32,
    pub percentage: u8,
}

/// Projection set for the active task view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub mode: TaskViewMode,
    pub overall: CompletionRate,
    pub per_unit: BTreeMap<TaskUnit, CompletionRate>,
}

/// Completion rate for each fixed unit of `collection`.
pub fn per_unit_completion(
    state: &DashboardState,
    collection: TaskCollection,
) -> BTreeMap<TaskUnit, CompletionRate> {
    collection
        .units()
        .into_iter()
        .map(|unit| (unit, CompletionRate::of_tasks(state.tasks(unit))))
        .collect()
}

/// Completion rate across every fixed unit of `collection`.
pub fn overall_completion(state: &DashboardState, collection: TaskCollection) -> CompletionRate {
    overall_from_units(&per_unit_completion(state, collection))
}

fn overall_from_units(rates: &BTreeMap<TaskUnit, CompletionRate>) -> CompletionRate {
    let (total, completed) = rates.values().fold((0, 0), |(total, completed), rate| {
        (total + rate.total, completed + rate.completed)
    });
    CompletionRate::from_counts(total, completed)
}

/// Weekly progress of every habit, in habit order.
pub fn habit_progress(state: &DashboardState) -> Vec<HabitProgress> {
    state
        .habits
        .iter()
        .map(|habit| {
            let completed_days = habit.completed_days();
            HabitProgress {
                habit: habit.clone(),
                completed_days,
                percentage: rounded_percentage(completed_days, DAYS_PER_WEEK as u32),
            }
        })
        .collect()
}

/// Projections for the collection selected by `task_view_mode`.
pub fn current_view(state: &DashboardState) -> CurrentView {
    let mode = state.task_view_mode;
    let per_unit = per_unit_completion(state, mode.collection());
    CurrentView {
        mode,
        overall: overall_from_units(&per_unit),
        per_unit,
    }
}
