//! Dashboard root state and UI preference records.
//!
//! # Responsibility
//! - Hold every habit and task collection in one serializable value.
//! - Build the seeded default dashboard.
//!
//! # Invariants
//! - `daily_tasks` has exactly seven day lists and `weekly_tasks` exactly four
//!   week lists; both are enforced by field layout.
//! - `monthly_tasks` is sparse: a missing day reads as an empty list.
//! - The serialized field names are camelCase and form the persisted layout.

use crate::model::habit::{default_habits, Habit};
use crate::model::task::Task;
use crate::model::units::{DayKey, MonthDay, TaskUnit, TaskViewMode, WeekKey};
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task lists for each weekday.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyTasks {
    pub monday: Vec<Task>,
    pub tuesday: Vec<Task>,
    pub wednesday: Vec<Task>,
    pub thursday: Vec<Task>,
    pub friday: Vec<Task>,
    pub saturday: Vec<Task>,
    pub sunday: Vec<Task>,
}

impl DailyTasks {
    /// List for one weekday.
    pub fn get(&self, day: DayKey) -> &Vec<Task> {
        match day {
            DayKey::Monday => &self.monday,
            DayKey::Tuesday => &self.tuesday,
            DayKey::Wednesday => &self.wednesday,
            DayKey::Thursday => &self.thursday,
            DayKey::Friday => &self.friday,
            DayKey::Saturday => &self.saturday,
            DayKey::Sunday => &self.sunday,
        }
    }

    /// Mutable list for one weekday.
    pub fn get_mut(&mut self, day: DayKey) -> &mut Vec<Task> {
        match day {
            DayKey::Monday => &mut self.monday,
            DayKey::Tuesday => &mut self.tuesday,
            DayKey::Wednesday => &mut self.wednesday,
            DayKey::Thursday => &mut self.thursday,
            DayKey::Friday => &mut self.friday,
            DayKey::Saturday => &mut self.saturday,
            DayKey::Sunday => &mut self.sunday,
        }
    }
}

/// Task lists for each week of the month.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyTasks {
    pub week1: Vec<Task>,
    pub week2: Vec<Task>,
    pub week3: Vec<Task>,
    pub week4: Vec<Task>,
}

impl WeeklyTasks {
    /// List for one week of the month.
    pub fn get(&self, week: WeekKey) -> &Vec<Task> {
        match week {
            WeekKey::Week1 => &self.week1,
            WeekKey::Week2 => &self.week2,
            WeekKey::Week3 => &self.week3,
            WeekKey::Week4 => &self.week4,
        }
    }

    /// Mutable list for one week of the month.
    pub fn get_mut(&mut self, week: WeekKey) -> &mut Vec<Task> {
        match week {
            WeekKey::Week1 => &mut self.week1,
            WeekKey::Week2 => &mut self.week2,
            WeekKey::Week3 => &mut self.week3,
            WeekKey::Week4 => &mut self.week4,
        }
    }
}

/// Sparse day-of-month task lists.
///
/// Keys are raw integers so that a persisted record carrying days outside
/// `1..=30` still loads; only `MonthDay` keys are ever read back.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyTasks(BTreeMap<u32, Vec<Task>>);

impl MonthlyTasks {
    /// Builds a map with an empty list for every tracked month day.
    pub fn with_all_days() -> Self {
        Self(MonthDay::all().map(|day| (day.get(), Vec::new())).collect())
    }

    /// List for `day`, empty when the day was never written.
    pub fn get(&self, day: MonthDay) -> &[Task] {
        self.0.get(&day.get()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the list for `day`, creating it on first write.
    pub fn get_mut(&mut self, day: MonthDay) -> &mut Vec<Task> {
        self.0.entry(day.get()).or_default()
    }

    /// Returns the stored list for `day` without creating one.
    pub fn existing_mut(&mut self, day: MonthDay) -> Option<&mut Vec<Task>> {
        self.0.get_mut(&day.get())
    }

    /// Raw access by integer key, including untracked days.
    pub fn raw(&self) -> &BTreeMap<u32, Vec<Task>> {
        &self.0
    }

    /// Raw mutable access by integer key, including untracked days.
    pub fn raw_mut(&mut self) -> &mut BTreeMap<u32, Vec<Task>> {
        &mut self.0
    }
}

/// Canonical dashboard state persisted as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub habits: Vec<Habit>,
    pub daily_tasks: DailyTasks,
    pub weekly_tasks: WeeklyTasks,
    pub monthly_tasks: MonthlyTasks,
    pub task_view_mode: TaskViewMode,
    /// Calendar month (1..=12) the dashboard was created in.
    pub current_month: u32,
    pub current_year: i32,
    /// `YYYY-MM-DD` of the Monday starting the tracked week.
    pub week_start_date: String,
}

impl DashboardState {
    /// Builds the seeded dashboard for the given local date.
    pub fn defaults_for(today: NaiveDate) -> Self {
        Self {
            habits: default_habits(),
            daily_tasks: DailyTasks::default(),
            weekly_tasks: WeeklyTasks::default(),
            monthly_tasks: MonthlyTasks::with_all_days(),
            task_view_mode: TaskViewMode::Daily,
            current_month: today.month(),
            current_year: today.year(),
            week_start_date: week_start(today).format("%Y-%m-%d").to_string(),
        }
    }

    /// Tasks stored in one unit. Missing month days read as empty.
    pub fn tasks(&self, unit: TaskUnit) -> &[Task] {
        match unit {
            TaskUnit::Day(day) => self.daily_tasks.get(day).as_slice(),
            TaskUnit::Week(week) => self.weekly_tasks.get(week).as_slice(),
            TaskUnit::MonthDay(day) => self.monthly_tasks.get(day),
        }
    }

    /// Mutable list for one unit. An absent month day is created empty.
    pub fn tasks_mut(&mut self, unit: TaskUnit) -> &mut Vec<Task> {
        match unit {
            TaskUnit::Day(day) => self.daily_tasks.get_mut(day),
            TaskUnit::Week(week) => self.weekly_tasks.get_mut(week),
            TaskUnit::MonthDay(day) => self.monthly_tasks.get_mut(day),
        }
    }

    /// Mutable list for one unit, or `None` for an absent month day.
    pub fn existing_tasks_mut(&mut self, unit: TaskUnit) -> Option<&mut Vec<Task>> {
        match unit {
            TaskUnit::Day(day) => Some(self.daily_tasks.get_mut(day)),
            TaskUnit::Week(week) => Some(self.weekly_tasks.get_mut(week)),
            TaskUnit::MonthDay(day) => self.monthly_tasks.existing_mut(day),
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::defaults_for(Local::now().date_naive())
    }
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

/// UI color scheme preference, stored apart from the dashboard record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Persisted lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}
