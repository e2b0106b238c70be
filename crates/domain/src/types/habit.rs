//! Habit entities and the status endpoint types

use serde::{Deserialize, Serialize};

use super::area::Area;

/// Completion state of a habit for a given day.
///
/// One enum serves the journal filter, the journal snapshot, the status
/// endpoint, and the status update; the server decides which subset each
/// endpoint accepts (`none` is only ever returned or written, never used as
/// a journal filter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitStatus {
    None,
    InProgress,
    Completed,
    Skipped,
    Failed,
}

impl HabitStatus {
    /// Wire form, used when placing the value in a query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Skipped => "skipped",
            Self::Failed => "failed",
        }
    }
}

/// Time-of-day buckets a habit is scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    AnyTime,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::AnyTime => "any_time",
        }
    }
}

/// Goal recurrence granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Periodicity {
    Daily,
    Weekly,
    Monthly,
}

/// How log entries are recorded for a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogMethod {
    Manual,
    AppleHealth,
    GoogleFit,
    SamsungHealth,
}

/// Quantified target attached to a habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Open-ended unit string (`"rep"`, `"min"`, `"kM"`, ...).
    pub unit_type: String,
    pub value: f64,
    pub periodicity: Periodicity,
}

/// Current-versus-target snapshot for a goal's periodicity as of
/// `reference_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub current_value: f64,
    pub target_value: f64,
    pub unit_type: String,
    pub periodicity: Periodicity,
    pub reference_date: String,
}

/// A tracked recurring activity.
///
/// `status` and `progress` are populated only when the habit was retrieved
/// through a journal listing; direct habit reads leave them `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub is_archived: bool,
    pub start_date: String,
    pub time_of_day: Vec<TimeOfDay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_history_items: Option<Vec<Goal>>,
    pub log_method: LogMethod,
    /// RRULE recurrence string.
    pub recurrence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remind: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<Area>,
    pub created_date: String,
    pub priority: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<HabitStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

/// Result of the habit status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitStatusInfo {
    pub status: HabitStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
}

/// Inputs for reading a habit's status on a date.
#[derive(Debug, Clone, Default)]
pub struct GetHabitStatusParams {
    pub habit_id: String,
    /// Reference date; the server defaults to today when omitted.
    pub target_date: Option<String>,
}

/// Inputs for writing a habit's status on a date.
#[derive(Debug, Clone)]
pub struct UpdateHabitStatusParams {
    pub habit_id: String,
    pub status: HabitStatus,
    pub target_date: Option<String>,
}
