//! Habit notes (text and image)

use serde::{Deserialize, Serialize};

/// Discriminates text notes from image notes; transported as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum NoteType {
    Text = 1,
    Image = 2,
}

impl From<NoteType> for u8 {
    fn from(value: NoteType) -> Self {
        value as Self
    }
}

impl TryFrom<u8> for NoteType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Text),
            2 => Ok(Self::Image),
            other => Err(format!("unknown note type: {other}")),
        }
    }
}

/// A text or image annotation attached to a habit.
///
/// Image notes carry an `image_url` and an empty `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub content: String,
    pub created_date: String,
    pub habit_id: String,
    pub note_type: NoteType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Inputs for listing a habit's notes, optionally bounded by a date range.
#[derive(Debug, Clone, Default)]
pub struct GetNotesParams {
    pub habit_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Inputs for attaching a text note.
#[derive(Debug, Clone)]
pub struct AddTextNoteParams {
    pub habit_id: String,
    pub content: String,
    /// Normalized before sending; defaults to the current instant.
    pub created_at: Option<String>,
}

/// Inputs for attaching an image note. Sent as a multipart body with exactly
/// two parts: the binary `image` and the `created_at` text.
#[derive(Debug, Clone)]
pub struct AddImageNoteParams {
    pub habit_id: String,
    pub image: Vec<u8>,
    /// File name reported in the multipart headers; defaults to `"image"`.
    pub file_name: Option<String>,
    /// Normalized before sending; defaults to the current instant.
    pub created_at: Option<String>,
}

/// Inputs for deleting a single note.
#[derive(Debug, Clone)]
pub struct DeleteNoteParams {
    pub habit_id: String,
    pub note_id: String,
}

/// Inputs for deleting a habit's notes in bulk, optionally bounded by a date
/// range.
#[derive(Debug, Clone, Default)]
pub struct DeleteNotesParams {
    pub habit_id: String,
    pub from: Option<String>,
    pub to: Option<String>,
}
