//! Journal listing parameters

use serde::{Deserialize, Serialize};

use super::habit::{HabitStatus, TimeOfDay};

/// Sort orders accepted by the journal listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitOrderBy {
    Priority,
    ReminderTime,
    Status,
}

impl HabitOrderBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::ReminderTime => "reminder_time",
            Self::Status => "status",
        }
    }
}

/// Filters for the per-day journal listing.
///
/// `target_date` is normalized and defaults to the current instant when
/// omitted; every other filter is forwarded only when present.
#[derive(Debug, Clone, Default)]
pub struct GetJournalParams {
    pub target_date: Option<String>,
    pub order_by: Option<HabitOrderBy>,
    pub status: Option<HabitStatus>,
    pub area_id: Option<String>,
    /// Repeated query key on the wire; one entry per bucket.
    pub time_of_day: Option<Vec<TimeOfDay>>,
}
