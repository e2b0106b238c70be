//! Domain-level constants
//!
//! Centralized location for defaults shared between the client crate and its
//! tests.

/// Production endpoint. Some deployments use a `/v1` suffix; that variant is
/// reached by overriding the base URL at construction.
pub const DEFAULT_BASE_URL: &str = "https://api.habitify.me";

/// Per-request timeout applied when the caller does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Canonical timestamp form accepted by the API: fixed-width, zero-padded,
/// explicit numeric offset (`2025-07-01T09:30:00+07:00`), never `Z`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Fallback message when a failure envelope carries no usable `message`.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";
