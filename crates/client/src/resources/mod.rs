//! Typed operations, one module per remote resource
//!
//! Every method here follows the same shape: validate required identifiers
//! locally, normalize date parameters, build the path and query/body, then
//! delegate to the transport. Errors from the envelope pipeline propagate
//! verbatim — no extra transformation happens at this layer.

mod actions;
mod areas;
mod habits;
mod journal;
mod logs;
mod moods;
mod notes;

use habitify_domain::{HabitifyError, Result};

/// Required identifiers must be non-empty before any network call goes out.
fn require_id<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.is_empty() {
        return Err(HabitifyError::InvalidArgument(format!("{name} must not be empty")));
    }
    Ok(value)
}

/// Optional `from`/`to` range filters, forwarded verbatim.
fn range_query(from: Option<&str>, to: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(from) = from {
        query.push(("from", from.to_string()));
    }
    if let Some(to) = to {
        query.push(("to", to.to_string()));
    }
    query
}
