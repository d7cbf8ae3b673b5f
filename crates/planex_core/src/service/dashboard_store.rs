//! Dashboard state container.
//!
//! # Responsibility
//! - Own the single canonical `DashboardState`.
//! - Apply mutations copy-then-swap, persist, and notify subscribers.
//! - Serve derived projections computed from the current state.
//!
//! # Invariants
//! - Readers never observe a half-applied mutation.
//! - Persistence is best effort: a failed write is logged and the in-memory
//!   state stays authoritative.
//! - `revision` increases by exactly one per mutation.
//! - Mutations take `&mut self`; hosts sharing the store across threads
//!   wrap it in a `Mutex` so writers stay serialized.
//! - The store is `Send` whenever its storage is. `SqliteKeyValueStore`
//!   borrows a `Connection` and stays on the thread that opened it.

use crate::model::dashboard::DashboardState;
use crate::model::habit::HabitId;
use crate::model::task::TaskId;
use crate::model::units::{TaskCollection, TaskUnit, TaskViewMode};
use crate::repo::kv_repo::KeyValueStore;
use crate::repo::snapshot_repo::{load_dashboard, write_dashboard};
use crate::service::projection::{self, CompletionRate, CurrentView, HabitProgress};
use crate::service::mutation::DashboardOp;
use chrono::{DateTime, Utc};
use log::{debug, warn};
use std::collections::BTreeMap;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&DashboardState, u64) + Send>;

/// Single owner of the dashboard state and its backing record.
pub struct DashboardStore<S: KeyValueStore> {
    storage: S,
    state: DashboardState,
    revision: u64,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl<S: KeyValueStore> DashboardStore<S> {
    /// Loads the persisted dashboard record, or defaults when it is absent
    /// or unreadable.
    pub fn load(storage: S) -> Self {
        let state = load_dashboard(&storage);
        Self::with_state(storage, state)
    }

    /// Wraps an existing state without touching storage.
    pub fn with_state(storage: S, state: DashboardState) -> Self {
        Self {
            storage,
            state,
            revision: 0,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Number of mutations applied since this store was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Backing record store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Registers a callback invoked after every mutation with the new state
    /// and revision.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&DashboardState, u64) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns `false` when the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    /// Applies `op` using the current time.
    ///
    /// Returns the created id for add operations.
    pub fn mutate(&mut self, op: DashboardOp) -> Option<String> {
        self.mutate_at(op, Utc::now())
    }

    /// Applies `op` with an explicit clock reading.
    pub fn mutate_at(&mut self, op: DashboardOp, now: DateTime<Utc>) -> Option<String> {
        let op_name = op.name();
        let mut next = self.state.clone();
        let created = op.apply(&mut next, now);
        self.state = next;
        self.revision += 1;

        debug!(
            "event=dashboard_mutate module=store status=ok op={} revision={}",
            op_name, self.revision
        );
        self.persist(op_name);
        self.notify();
        created
    }

    /// Flips one weekday slot (`0` = Monday) of a habit.
    pub fn toggle_habit_day(&mut self, habit_id: &str, day_index: usize) {
        self.mutate(DashboardOp::ToggleHabitDay {
            habit_id: habit_id.to_string(),
            day_index,
        });
    }

    /// Appends a habit with an empty week and returns its id.
    pub fn add_habit(&mut self, name: impl Into<String>, color: impl Into<String>) -> HabitId {
        self.mutate(DashboardOp::AddHabit {
            name: name.into(),
            color: color.into(),
        })
        .unwrap_or_default()
    }

    /// Drops a habit by id.
    pub fn remove_habit(&mut self, habit_id: &str) {
        self.mutate(DashboardOp::RemoveHabit {
            habit_id: habit_id.to_string(),
        });
    }

    /// Renames and recolors a habit, keeping its progress.
    pub fn update_habit(
        &mut self,
        habit_id: &str,
        name: impl Into<String>,
        color: impl Into<String>,
    ) {
        self.mutate(DashboardOp::UpdateHabit {
            habit_id: habit_id.to_string(),
            name: name.into(),
            color: color.into(),
        });
    }

    /// Flips completion of one task in `unit`.
    pub fn toggle_task(&mut self, unit: TaskUnit, task_id: &str) {
        self.mutate(DashboardOp::ToggleTask {
            unit,
            task_id: task_id.to_string(),
        });
    }

    /// Appends an open task to `unit` and returns its id.
    pub fn add_task(&mut self, unit: TaskUnit, text: impl Into<String>) -> TaskId {
        self.mutate(DashboardOp::AddTask {
            unit,
            text: text.into(),
        })
        .unwrap_or_default()
    }

    /// Drops one task from `unit`.
    pub fn remove_task(&mut self, unit: TaskUnit, task_id: &str) {
        self.mutate(DashboardOp::RemoveTask {
            unit,
            task_id: task_id.to_string(),
        });
    }

    /// Replaces the text of one task, keeping id and completion.
    pub fn update_task(&mut self, unit: TaskUnit, task_id: &str, text: impl Into<String>) {
        self.mutate(DashboardOp::UpdateTask {
            unit,
            task_id: task_id.to_string(),
            text: text.into(),
        });
    }

    /// Clears every habit week.
    pub fn reset_habits(&mut self) {
        self.mutate(DashboardOp::ResetHabits);
    }

    /// Marks every task in `collection` open.
    pub fn reset_tasks(&mut self, collection: TaskCollection) {
        self.mutate(DashboardOp::ResetTasks(collection));
    }

    /// Clears habit weeks and all three task collections in one mutation.
    pub fn reset_all(&mut self) {
        self.mutate(DashboardOp::ResetAll);
    }

    /// Selects the collection shown by `current_view`.
    pub fn set_view_mode(&mut self, mode: TaskViewMode) {
        self.mutate(DashboardOp::SetViewMode(mode));
    }

    /// Completion per unit of `collection`, keyed in display order.
    pub fn per_unit_completion(
        &self,
        collection: TaskCollection,
    ) -> BTreeMap<TaskUnit, CompletionRate> {
        projection::per_unit_completion(&self.state, collection)
    }

    /// Summed completion across every unit of `collection`.
    pub fn overall_completion(&self, collection: TaskCollection) -> CompletionRate {
        projection::overall_completion(&self.state, collection)
    }

    /// Habits in stored order with their weekly completion.
    pub fn habit_progress(&self) -> Vec<HabitProgress> {
        projection::habit_progress(&self.state)
    }

    /// Completion summary for the selected view mode.
    pub fn current_view(&self) -> CurrentView {
        projection::current_view(&self.state)
    }

    fn persist(&self, op_name: &str) {
        if let Err(err) = write_dashboard(&self.storage, &self.state) {
            warn!(
                "event=dashboard_persist module=store status=error op={} revision={} error={}",
                op_name, self.revision, err
            );
        }
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.state, self.revision);
        }
    }
}
