//! Habit log entries

use serde::{Deserialize, Serialize};

/// A single recorded value against a habit at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub id: String,
    pub value: f64,
    pub created_date: String,
    pub unit_type: String,
    pub habit_id: String,
}

/// Inputs for listing a habit's logs, optionally bounded by a date range.
#[derive(Debug, Clone, Default)]
pub struct GetLogsParams {
    pub habit_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Inputs for recording a new log value.
#[derive(Debug, Clone)]
pub struct AddLogParams {
    pub habit_id: String,
    pub unit_type: String,
    pub value: f64,
    /// Normalized before sending; defaults to the current instant.
    pub target_date: Option<String>,
}

/// Inputs for deleting a single log entry.
#[derive(Debug, Clone)]
pub struct DeleteLogParams {
    pub habit_id: String,
    pub log_id: String,
}

/// Inputs for deleting a habit's logs in bulk, optionally bounded by a date
/// range.
#[derive(Debug, Clone, Default)]
pub struct DeleteLogsParams {
    pub habit_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}
