//! Mood entries

use serde::{Deserialize, Serialize};

/// Mood scale; transported as an integer 1-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MoodValue {
    Terrible = 1,
    Bad = 2,
    Okay = 3,
    Good = 4,
    Excellent = 5,
}

impl From<MoodValue> for u8 {
    fn from(value: MoodValue) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for MoodValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Terrible),
            2 => Ok(Self::Bad),
            3 => Ok(Self::Okay),
            4 => Ok(Self::Good),
            5 => Ok(Self::Excellent),
            other => Err(format!("mood value out of range 1-5: {other}")),
        }
    }
}

/// A single timestamped mood entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mood {
    pub id: String,
    pub value: MoodValue,
    pub created_at: String,
}

/// Inputs for listing moods, optionally filtered to a date.
#[derive(Debug, Clone, Default)]
pub struct GetMoodsParams {
    /// Normalized when present; the server defaults to today when omitted.
    pub target_date: Option<String>,
}

/// Inputs for reading a single mood entry.
#[derive(Debug, Clone, Default)]
pub struct GetMoodParams {
    pub mood_id: String,
}

/// Inputs for recording a new mood entry.
#[derive(Debug, Clone)]
pub struct CreateMoodParams {
    pub value: MoodValue,
    /// Normalized before sending; defaults to the current instant.
    pub created_at: Option<String>,
}

/// Inputs for rewriting an existing mood entry.
#[derive(Debug, Clone)]
pub struct UpdateMoodParams {
    pub mood_id: String,
    pub value: MoodValue,
    /// Normalized when present; left untouched server-side when omitted.
    pub created_at: Option<String>,
}

/// Inputs for deleting a mood entry.
#[derive(Debug, Clone, Default)]
pub struct DeleteMoodParams {
    pub mood_id: String,
}
