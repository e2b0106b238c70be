//! Journal listing

use habitify_domain::utils::datetime::normalize_timestamp;
use habitify_domain::{GetJournalParams, Habit, Result};

use crate::client::HabitifyClient;

impl HabitifyClient {
    /// List the journal: habits scheduled for a day, each carrying its
    /// computed status and progress snapshot.
    ///
    /// `target_date` is normalized and defaults to the current instant;
    /// the remaining filters are forwarded only when present.
    pub async fn get_journal(&self, params: &GetJournalParams) -> Result<Vec<Habit>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        query.push(("target_date", normalize_timestamp(params.target_date.as_deref())?));
        if let Some(order_by) = params.order_by {
            query.push(("order_by", order_by.as_str().to_string()));
        }
        if let Some(status) = params.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(area_id) = &params.area_id {
            query.push(("area_id", area_id.clone()));
        }
        if let Some(buckets) = &params.time_of_day {
            for bucket in buckets {
                query.push(("time_of_day", bucket.as_str().to_string()));
            }
        }

        self.http().get("/journal", &query).await
    }
}
