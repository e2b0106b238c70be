//! Client configuration

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use habitify_domain::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use crate::logging::{Logger, TracingLogger};

/// How the API key is placed in the `Authorization` header.
///
/// Both forms occur in the wild: the unversioned deployment takes the key
/// verbatim, the `/v1` deployment expects a `Bearer ` prefix. Which one is
/// current is an environment question, so it is configuration here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: <key>`
    #[default]
    Raw,
    /// `Authorization: Bearer <key>`
    Bearer,
}

/// Configuration for [`HabitifyClient`](crate::HabitifyClient).
///
/// The client holds nothing beyond what is configured here plus the shared
/// transport; all of it is read-only after construction.
#[derive(Clone)]
pub struct HabitifyConfig {
    /// API key sent on every request. Required; an empty key fails client
    /// construction before any I/O.
    pub api_key: String,
    /// Endpoint the paths are resolved against. A trailing slash is trimmed.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Form of the `Authorization` header.
    pub auth_scheme: AuthScheme,
    /// Additional headers appended to every request.
    pub extra_headers: Vec<(String, String)>,
    /// Log sink; defaults to the tracing-backed implementation.
    pub logger: Arc<dyn Logger>,
}

impl HabitifyConfig {
    /// Configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            auth_scheme: AuthScheme::default(),
            extra_headers: Vec::new(),
            logger: Arc::new(TracingLogger),
        }
    }

    /// Start building a configuration fluently.
    pub fn builder() -> HabitifyConfigBuilder {
        HabitifyConfigBuilder { config: Self::new("") }
    }
}

impl fmt::Debug for HabitifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HabitifyConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("auth_scheme", &self.auth_scheme)
            .field("extra_headers", &self.extra_headers)
            .finish_non_exhaustive()
    }
}

/// Builder for [`HabitifyConfig`].
pub struct HabitifyConfigBuilder {
    config: HabitifyConfig,
}

impl HabitifyConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn auth_scheme(mut self, scheme: AuthScheme) -> Self {
        self.config.auth_scheme = scheme;
        self
    }

    /// Append a header to every request.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.extra_headers.push((name.into(), value.into()));
        self
    }

    pub fn logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.config.logger = logger;
        self
    }

    /// Finish building. Validation happens when the client is constructed.
    pub fn build(self) -> HabitifyConfig {
        self.config
    }
}
