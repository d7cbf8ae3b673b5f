//! Core domain logic for the Planex habit and task dashboard.
//! This crate is the single source of truth for dashboard state and its
//! derived completion statistics.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::dashboard::{DashboardState, Theme};
pub use model::habit::{Habit, HabitId};
pub use model::task::{Task, TaskId};
pub use model::units::{DayKey, MonthDay, TaskCollection, TaskUnit, TaskViewMode, WeekKey};
pub use repo::kv_repo::{
    KeyValueStore, MemoryKeyValueStore, RepoError, RepoResult, SqliteKeyValueStore,
};
pub use service::dashboard_store::{DashboardStore, SubscriptionId};
pub use service::mutation::DashboardOp;
pub use service::projection::{CompletionRate, CurrentView, HabitProgress};
pub use service::theme_service::ThemeService;

/// Minimal health-check API for host integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
