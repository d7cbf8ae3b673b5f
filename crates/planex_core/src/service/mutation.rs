//! Dashboard mutation operations.
//!
//! # Responsibility
//! - Describe every state change as one `DashboardOp` value.
//! - Apply an op to a state value in place.
//!
//! # Invariants
//! - Unknown habit/task ids and out-of-range day indexes are silent no-ops.
//! - Ops never remove a fixed day/week unit; only list contents change.
//! - Monthly resets touch days `1..=30` and leave untracked keys as stored.
//! - Only `AddTask` may create a month day list.

use crate::model::dashboard::DashboardState;
use crate::model::habit::{Habit, HabitId};
use crate::model::task::{Task, TaskId};
use crate::model::units::{TaskCollection, TaskUnit, TaskViewMode};
use chrono::{DateTime, Utc};

/// One state change issued by a dashboard caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardOp {
    /// Flip one weekday slot (`0` = Monday) of a habit.
    ToggleHabitDay { habit_id: HabitId, day_index: usize },
    AddHabit { name: String, color: String },
    RemoveHabit { habit_id: HabitId },
    /// Replace name and color; progress is kept.
    UpdateHabit {
        habit_id: HabitId,
        name: String,
        color: String,
    },
    ToggleTask { unit: TaskUnit, task_id: TaskId },
    AddTask { unit: TaskUnit, text: String },
    RemoveTask { unit: TaskUnit, task_id: TaskId },
    UpdateTask {
        unit: TaskUnit,
        task_id: TaskId,
        text: String,
    },
    ResetHabits,
    ResetTasks(TaskCollection),
    /// Habits plus all three task collections in one change.
    ResetAll,
    SetViewMode(TaskViewMode),
}

impl DashboardOp {
    /// Stable op name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleHabitDay { .. } => "toggle_habit_day",
            Self::AddHabit { .. } => "add_habit",
            Self::RemoveHabit { .. } => "remove_habit",
            Self::UpdateHabit { .. } => "update_habit",
            Self::ToggleTask { .. } => "toggle_task",
            Self::AddTask { .. } => "add_task",
            Self::RemoveTask { .. } => "remove_task",
            Self::UpdateTask { .. } => "update_task",
            Self::ResetHabits => "reset_habits",
            Self::ResetTasks(_) => "reset_tasks",
            Self::ResetAll => "reset_all",
            Self::SetViewMode(_) => "set_view_mode",
        }
    }

    /// Applies this op to `state`.
    ///
    /// Returns the id of the created entity for `AddHabit`/`AddTask`.
    pub fn apply(self, state: &mut DashboardState, now: DateTime<Utc>) -> Option<String> {
        match self {
            Self::ToggleHabitDay {
                habit_id,
                day_index,
            } => {
                if let Some(habit) = find_habit(state, &habit_id) {
                    habit.toggle_day(day_index);
                }
            }
            Self::AddHabit { name, color } => {
                let habit = Habit::new(name, color, now);
                let id = habit.id.clone();
                state.habits.push(habit);
                return Some(id);
            }
            Self::RemoveHabit { habit_id } => {
                state.habits.retain(|habit| habit.id != habit_id);
            }
            Self::UpdateHabit {
                habit_id,
                name,
                color,
            } => {
                if let Some(habit) = find_habit(state, &habit_id) {
                    habit.name = name;
                    habit.color = color;
                }
            }
            Self::ToggleTask { unit, task_id } => {
                if let Some(task) = find_task(state, unit, &task_id) {
                    task.toggle();
                }
            }
            Self::AddTask { unit, text } => {
                let task = Task::new(unit, text, now);
                let id = task.id.clone();
                state.tasks_mut(unit).push(task);
                return Some(id);
            }
            Self::RemoveTask { unit, task_id } => {
                if let Some(tasks) = state.existing_tasks_mut(unit) {
                    tasks.retain(|task| task.id != task_id);
                }
            }
            Self::UpdateTask {
                unit,
                task_id,
                text,
            } => {
                if let Some(task) = find_task(state, unit, &task_id) {
                    task.text = text;
                }
            }
            Self::ResetHabits => reset_habits(state),
            Self::ResetTasks(collection) => reset_tasks(state, collection),
            Self::ResetAll => {
                reset_habits(state);
                for collection in TaskCollection::ALL {
                    reset_tasks(state, collection);
                }
            }
            Self::SetViewMode(mode) => state.task_view_mode = mode,
        }
        None
    }
}

fn find_habit<'a>(state: &'a mut DashboardState, habit_id: &str) -> Option<&'a mut Habit> {
    state.habits.iter_mut().find(|habit| habit.id == habit_id)
}

fn find_task<'a>(
    state: &'a mut DashboardState,
    unit: TaskUnit,
    task_id: &str,
) -> Option<&'a mut Task> {
    state
        .existing_tasks_mut(unit)?
        .iter_mut()
        .find(|task| task.id == task_id)
}

fn reset_habits(state: &mut DashboardState) {
    state.habits.iter_mut().for_each(Habit::reset_week);
}

fn reset_tasks(state: &mut DashboardState, collection: TaskCollection) {
    for unit in collection.units() {
        if let Some(tasks) = state.existing_tasks_mut(unit) {
            tasks.iter_mut().for_each(|task| task.completed = false);
        }
    }
}
