//! Note operations (text and image)

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{
    AddImageNoteParams, AddTextNoteParams, DeleteNoteParams, DeleteNotesParams, GetNotesParams,
    Note, Result,
};
use reqwest::multipart::{Form, Part};
use serde_json::json;

use super::{range_query, require_id};
use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List a habit's notes, optionally bounded by `from`/`to`.
    pub async fn get_notes(&self, params: &GetNotesParams) -> Result<Vec<Note>> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let query = range_query(params.from.as_deref(), params.to.as_deref());

        self.http().get(&format!("/habits/{habit_id}/notes"), &query).await
    }

    /// Attach a text note; `created_at` defaults to the current instant.
    pub async fn add_text_note(&self, params: &AddTextNoteParams) -> Result<Note> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        let body = json!({
            "content": params.content,
            "created_at": normalize_timestamp(params.created_at.as_deref())?,
        });

        self.http().post(&format!("/habits/{habit_id}/notes"), &body).await
    }

    /// Attach an image note.
    ///
    /// Sent as a multipart body with exactly two parts — the binary `image`
    /// and the `created_at` text — and the multipart content type instead of
    /// the default JSON one. The response still flows through the envelope
    /// pipeline like every other call.
    pub async fn add_image_note(&self, params: &AddImageNoteParams) -> Result<Note> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let created_at = normalize_timestamp(params.created_at.as_deref())?;

        let file_name = params.file_name.clone().unwrap_or_else(|| "image".to_string());
        let form = Form::new()
            .part("image", Part::bytes(params.image.clone()).file_name(file_name))
            .text("created_at", created_at);

        self.http().post_multipart(&format!("/habits/{habit_id}/notes"), form).await
    }

    /// Delete a single note.
    pub async fn delete_note(&self, params: &DeleteNoteParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let note_id = require_id("note_id", &params.note_id)?;

        self.http().delete(&format!("/habits/{habit_id}/notes/{note_id}"), &[]).await
    }

    /// Delete a habit's notes in bulk; `from`/`to` bound the range as query
    /// parameters.
    pub async fn delete_notes(&self, params: &DeleteNotesParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let query = range_query(params.from.as_deref(), params.to.as_deref());

        self.http().delete(&format!("/habits/{habit_id}/notes"), &query).await
    }
}
