//! Area operations

use habitify_domain::{Area, Result};

use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List the caller's habit areas.
    pub async fn get_areas(&self) -> Result<Vec<Area>> {
        self.http().get("/areas", &[]).await
    }
}
