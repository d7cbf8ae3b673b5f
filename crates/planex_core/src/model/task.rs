//! Task domain model.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - Only `text` and `completed` are mutable.

use crate::model::time_based_id;
use crate::model::units::TaskUnit;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Stable task identifier.
pub type TaskId = String;

/// One checklist entry inside a task unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    /// RFC 3339 UTC timestamp.
    pub created_at: String,
}

impl Task {
    /// Creates an open task for `unit` with an id derived from `now`.
    pub fn new(unit: TaskUnit, text: impl Into<String>, now: DateTime<Utc>) -> Self {
        let prefix = format!("task-{}-{}", unit.collection().as_str(), unit.key());
        Self {
            id: time_based_id(&prefix, now),
            text: text.into(),
            completed: false,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Flips completion.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
