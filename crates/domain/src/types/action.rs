//! Reminder actions tied to habits

use serde::{Deserialize, Serialize};

/// Completion state of an action; transported as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActionStatus {
    NotDoneYet = 0,
    Done = 1,
}

impl From<ActionStatus> for u8 {
    fn from(value: ActionStatus) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for ActionStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NotDoneYet),
            1 => Ok(Self::Done),
            other => Err(format!("unknown action status: {other}")),
        }
    }
}

/// A reminder/task item tied to a habit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub remind_at: String,
    pub status: ActionStatus,
    pub title: String,
    pub updated_at: String,
    pub habit_id: String,
}

/// Inputs for listing a habit's actions.
#[derive(Debug, Clone, Default)]
pub struct GetActionsParams {
    pub habit_id: String,
}

/// Inputs for reading a single action.
#[derive(Debug, Clone)]
pub struct GetActionParams {
    pub habit_id: String,
    pub action_id: String,
}

/// Inputs for creating an action.
#[derive(Debug, Clone)]
pub struct CreateActionParams {
    pub habit_id: String,
    pub title: String,
    /// Normalized before sending.
    pub remind_at: String,
}

/// Inputs for updating an action; omitted fields are left untouched.
#[derive(Debug, Clone)]
pub struct UpdateActionParams {
    pub habit_id: String,
    pub action_id: String,
    pub status: Option<ActionStatus>,
    pub title: Option<String>,
    /// Normalized when present.
    pub remind_at: Option<String>,
}

/// Inputs for deleting an action.
#[derive(Debug, Clone)]
pub struct DeleteActionParams {
    pub habit_id: String,
    pub action_id: String,
}
