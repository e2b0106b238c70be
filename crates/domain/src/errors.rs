//! Error types used throughout the client

use std::time::Duration;

use thiserror::Error;

/// Main error type for Habitify API operations
#[derive(Error, Debug)]
pub enum HabitifyError {
    /// A required identifier or field is missing or malformed. Raised
    /// locally, before any network call is issued.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network failure or a response that carries no parseable envelope.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The per-request timeout elapsed before the server answered.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The server reported failure through the response envelope
    /// (`status == false`), independent of the HTTP status class.
    #[error("API error: {message}")]
    Api {
        /// Server-supplied message, or the generic fallback.
        message: String,
        /// HTTP status code of the response, where obtainable.
        status_code: Option<u16>,
        /// Raw response body kept for diagnostics.
        body: Option<String>,
    },
}

impl HabitifyError {
    /// Shorthand for an [`HabitifyError::Api`] without transport context.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api { message: message.into(), status_code: None, body: None }
    }
}

/// Result type alias for Habitify operations
pub type Result<T> = std::result::Result<T, HabitifyError>;
