//! Task collection and unit keys.
//!
//! # Responsibility
//! - Name the three task collections and the fixed units inside each.
//! - Provide stable string forms shared by ids, logs and persisted records.
//!
//! # Invariants
//! - Daily units are exactly Monday..Sunday, weekly units exactly week1..week4.
//! - `MonthDay` only holds values in `1..=MONTH_DAYS`.
//! - A `TaskUnit` always pairs a unit key with its own collection.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Number of day slots tracked by the monthly collection.
pub const MONTH_DAYS: u8 = 30;

/// Day of the week, Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayKey {
    /// All days in display order. Index matches habit progress slots.
    pub const ALL: [DayKey; 7] = [
        DayKey::Monday,
        DayKey::Tuesday,
        DayKey::Wednesday,
        DayKey::Thursday,
        DayKey::Friday,
        DayKey::Saturday,
        DayKey::Sunday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Short label used by compact views (`Mon`, `Tue`, ...).
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    /// Zero-based position, Monday = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Week slot inside a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekKey {
    Week1,
    Week2,
    Week3,
    Week4,
}

impl WeekKey {
    pub const ALL: [WeekKey; 4] = [WeekKey::Week1, WeekKey::Week2, WeekKey::Week3, WeekKey::Week4];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week1 => "week1",
            Self::Week2 => "week2",
            Self::Week3 => "week3",
            Self::Week4 => "week4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Week1 => "Week 1",
            Self::Week2 => "Week 2",
            Self::Week3 => "Week 3",
            Self::Week4 => "Week 4",
        }
    }
}

/// Day-of-month slot for the monthly collection (`1..=MONTH_DAYS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay(u8);

impl MonthDay {
    /// Returns `None` when `day` is outside `1..=MONTH_DAYS`.
    pub fn new(day: u32) -> Option<Self> {
        if (1..=u32::from(MONTH_DAYS)).contains(&day) {
            Some(Self(day as u8))
        } else {
            None
        }
    }

    pub fn get(self) -> u32 {
        u32::from(self.0)
    }

    /// Iterates every tracked month day in ascending order.
    pub fn all() -> impl Iterator<Item = MonthDay> {
        (1..=MONTH_DAYS).map(MonthDay)
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three task groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskCollection {
    Daily,
    Weekly,
    Monthly,
}

impl TaskCollection {
    pub const ALL: [TaskCollection; 3] = [
        TaskCollection::Daily,
        TaskCollection::Weekly,
        TaskCollection::Monthly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Fixed unit keys of this collection in display order.
    pub fn units(self) -> Vec<TaskUnit> {
        match self {
            Self::Daily => DayKey::ALL.into_iter().map(TaskUnit::Day).collect(),
            Self::Weekly => WeekKey::ALL.into_iter().map(TaskUnit::Week).collect(),
            Self::Monthly => MonthDay::all().map(TaskUnit::MonthDay).collect(),
        }
    }
}

/// Addresses one unit of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskUnit {
    Day(DayKey),
    Week(WeekKey),
    MonthDay(MonthDay),
}

impl TaskUnit {
    pub fn collection(self) -> TaskCollection {
        match self {
            Self::Day(_) => TaskCollection::Daily,
            Self::Week(_) => TaskCollection::Weekly,
            Self::MonthDay(_) => TaskCollection::Monthly,
        }
    }

    /// Stable unit key (`monday`, `week2`, `17`).
    pub fn key(self) -> String {
        match self {
            Self::Day(day) => day.as_str().to_string(),
            Self::Week(week) => week.as_str().to_string(),
            Self::MonthDay(day) => day.to_string(),
        }
    }
}

impl Display for TaskUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.collection().as_str(), self.key())
    }
}

/// Which collection the task panel currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskViewMode {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl TaskViewMode {
    pub fn collection(self) -> TaskCollection {
        match self {
            Self::Daily => TaskCollection::Daily,
            Self::Weekly => TaskCollection::Weekly,
            Self::Monthly => TaskCollection::Monthly,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.collection().as_str()
    }
}

/// Parse errors for unit and mode strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnitKeyError {
    UnknownDay(String),
    UnknownWeek(String),
    UnknownViewMode(String),
}

impl Display for UnitKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownDay(value) => write!(f, "unknown day key: `{value}`"),
            Self::UnknownWeek(value) => write!(f, "unknown week key: `{value}`"),
            Self::UnknownViewMode(value) => write!(f, "unknown task view mode: `{value}`"),
        }
    }
}

impl Error for UnitKeyError {}

impl FromStr for DayKey {
    type Err = UnitKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        DayKey::ALL
            .into_iter()
            .find(|day| day.as_str() == normalized)
            .ok_or_else(|| UnitKeyError::UnknownDay(value.to_string()))
    }
}

impl FromStr for WeekKey {
    type Err = UnitKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        WeekKey::ALL
            .into_iter()
            .find(|week| week.as_str() == normalized)
            .ok_or_else(|| UnitKeyError::UnknownWeek(value.to_string()))
    }
}

impl FromStr for TaskViewMode {
    type Err = UnitKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(UnitKeyError::UnknownViewMode(value.to_string())),
        }
    }
}
