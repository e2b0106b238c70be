//! The Habitify client type

use habitify_domain::{HabitifyError, Result};

use crate::config::HabitifyConfig;
use crate::http::HttpTransport;

/// Typed client for the Habitify API.
///
/// Constructed once and reused; it carries only the configured credentials
/// and the shared transport, so any number of calls may be in flight
/// concurrently. Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HabitifyClient {
    transport: HttpTransport,
}

impl std::fmt::Debug for HabitifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HabitifyClient").finish_non_exhaustive()
    }
}

impl HabitifyClient {
    /// Build a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HabitifyError::InvalidArgument`] when the API key is empty
    /// or a configured header cannot be encoded. No network I/O happens
    /// here.
    pub fn new(config: HabitifyConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(HabitifyError::InvalidArgument("API key is required".into()));
        }

        Ok(Self { transport: HttpTransport::new(&config)? })
    }

    /// Raw transport handle.
    ///
    /// Exposes generic envelope-aware `get`/`post`/`put`/`delete` for
    /// endpoints without a typed method; responses still pass through the
    /// same interpretation pipeline.
    pub fn http(&self) -> &HttpTransport {
        &self.transport
    }
}
