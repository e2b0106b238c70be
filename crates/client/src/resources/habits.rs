//! Habit status operations

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{GetHabitStatusParams, HabitStatusInfo, Result, UpdateHabitStatusParams};
use serde_json::{json, Value};

use super::require_id;
use crate::client::HabitifyClient;

impl HabitifyClient {
    /// Read a habit's completion status (and progress, if the habit carries
    /// a goal) for a date.
    pub async fn get_habit_status(
        &self,
        params: &GetHabitStatusParams,
    ) -> Result<HabitStatusInfo> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(date) = params.target_date.as_deref() {
            query.push(("target_date", normalize_timestamp(Some(date))?));
        }

        self.http().get(&format!("/habits/{habit_id}/status"), &query).await
    }

    /// Write a habit's completion status for a date. Idempotent: repeating
    /// the same update converges to the same state.
    pub async fn update_habit_status(&self, params: &UpdateHabitStatusParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        let mut body = json!({ "status": params.status });
        if let Some(date) = params.target_date.as_deref() {
            body["target_date"] = Value::String(normalize_timestamp(Some(date))?);
        }

        self.http().put(&format!("/habits/{habit_id}/status"), &body).await
    }
}
