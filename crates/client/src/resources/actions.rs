//! Action (reminder) operations

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{
    Action, CreateActionParams, DeleteActionParams, GetActionParams, GetActionsParams, Result,
    UpdateActionParams,
};
use serde_json::{json, Map, Value};

use super::require_id;
use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List a habit's actions.
    pub async fn get_actions(&self, params: &GetActionsParams) -> Result<Vec<Action>> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        self.http().get(&format!("/habits/{habit_id}/actions"), &[]).await
    }

    /// Read a single action.
    pub async fn get_action(&self, params: &GetActionParams) -> Result<Action> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let action_id = require_id("action_id", &params.action_id)?;

        self.http().get(&format!("/habits/{habit_id}/actions/{action_id}"), &[]).await
    }

    /// Create an action. Not idempotent.
    pub async fn create_action(&self, params: &CreateActionParams) -> Result<Action> {
        let habit_id = require_id("habit_id", &params.habit_id)?;

        let body = json!({
            "title": params.title,
            "remind_at": normalize_timestamp(Some(&params.remind_at))?,
        });

        self.http().post(&format!("/habits/{habit_id}/actions"), &body).await
    }

    /// Update an action; only the provided fields are written. Idempotent.
    pub async fn update_action(&self, params: &UpdateActionParams) -> Result<Action> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let action_id = require_id("action_id", &params.action_id)?;

        let mut body = Map::new();
        if let Some(status) = params.status {
            body.insert("status".to_string(), json!(status));
        }
        if let Some(title) = &params.title {
            body.insert("title".to_string(), Value::String(title.clone()));
        }
        if let Some(remind_at) = params.remind_at.as_deref() {
            body.insert(
                "remind_at".to_string(),
                Value::String(normalize_timestamp(Some(remind_at))?),
            );
        }

        self.http()
            .put(&format!("/habits/{habit_id}/actions/{action_id}"), &Value::Object(body))
            .await
    }

    /// Delete an action. Idempotent by contract; deleting an already-deleted
    /// action surfaces whatever the server reports for a missing resource.
    pub async fn delete_action(&self, params: &DeleteActionParams) -> Result<()> {
        let habit_id = require_id("habit_id", &params.habit_id)?;
        let action_id = require_id("action_id", &params.action_id)?;

        self.http().delete(&format!("/habits/{habit_id}/actions/{action_id}"), &[]).await
    }
}
