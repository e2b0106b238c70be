//! Habit log operations

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{
    AddLogParams, DeleteLogParams, DeleteLogsParams, GetLogsParams, Log, Result,
};
use serde_json::json;

use super::{range_query, require_id};
use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List a habit's log entries, optionally bounded by `from`/`to`.
    pub async fn get_logs(&self, params: &GetLogsParams) -> Result<Vec<Log>> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let query = range_query(params.from.as_deref(), params.to.as_deref());

        self.http().get(&format!("/habits/{habit_id}/logs"), &query).await
    }

    /// Record a value against a habit. Not idempotent: every call creates a
    /// new log entry.
    pub async fn add_log(&self, params: &AddLogParams) -> Result<Log> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        let body = json!({
            "unit_type": params.unit_type,
            "value": params.value,
            "target_date": normalize_timestamp(params.target_date.as_deref())?,
        });

        self.http().post(&format!("/habits/{habit_id}/logs"), &body).await
    }

    /// Delete a single log entry.
    pub async fn delete_log(&self, params: &DeleteLogParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let log_id = require_id("log_id", &params.log_id)?;

        self.http().delete(&format!("/habits/{habit_id}/logs/{log_id}"), &[]).await
    }

    /// Delete a habit's log entries in bulk; `from`/`to` bound the range as
    /// query parameters.
    pub async fn delete_logs(&self, params: &DeleteLogsParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let query = range_query(params.from.as_deref(), params.to.as_deref());

        self.http().delete(&format!("/habits/{habit_id}/logs"), &query).await
    }
}
