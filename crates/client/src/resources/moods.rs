//! Mood operations

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{
    CreateMoodParams, DeleteMoodParams, GetMoodParams, GetMoodsParams, Mood, Result,
    UpdateMoodParams,
};
use serde_json::{json, Value};

use super::require_id;
use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List mood entries, optionally filtered to a date.
    pub async fn get_moods(&self, params: &GetMoodsParams) -> Result<Vec<Mood>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(date) = params.target_date.as_deref() {
            query.push(("target_date", normalize_timestamp(Some(date))?));
        }

        self.http().get("/moods", &query).await
    }

    /// Read a single mood entry.
    pub async fn get_mood(&self, params: &GetMoodParams) -> Result<Mood> {
        let mood_id = require_id("mood_id", &params.mood_id)?;

        self.http().get(&format!("/moods/{mood_id}"), &[]).await
    }

    /// Record a mood entry; `created_at` defaults to the current instant.
    pub async fn create_mood(&self, params: &CreateMoodParams) -> Result<Mood> {
        let body = json!({
            "value": params.value,
            "created_at": normalize_timestamp(params.created_at.as_deref())?,
        });

        self.http().post("/moods", &body).await
    }

    /// Rewrite a mood entry. Idempotent.
    pub async fn update_mood(&self, params: &UpdateMoodParams) -> Result<Mood> {
        let mood_id = require_id("mood_id", &params.mood_id)?;

        let mut body = json!({ "value": params.value });
        if let Some(date) = params.created_at.as_deref() {
            body["created_at"] = Value::String(normalize_timestamp(Some(date))?);
        }

        self.http().put(&format!("/moods/{mood_id}"), &body).await
    }

    /// Delete a mood entry.
    pub async fn delete_mood(&self, params: &DeleteMoodParams) -> Result<()> {
        let mood_id = require_id("mood_id", &params.mood_id)?;

        self.http().delete(&format!("/moods/{mood_id}"), &[]).await
    }
}
