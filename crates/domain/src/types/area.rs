//! Habit grouping categories

use serde::{Deserialize, Serialize};

/// A named grouping for habits. Read-only from this client's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub created_date: String,
    /// Sort priority; the API transports this one as a string.
    pub priority: String,
}
