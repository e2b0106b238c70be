//! Injectable logging capability
//!
//! The client logs on three channels: a general informational channel, an
//! error channel exercised on every failure path, and a debug channel that
//! traces requests and responses. The sink is injected at construction
//! instead of living in global state; the default forwards to `tracing`.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Pluggable log sink.
///
/// Implementations must be cheap and non-blocking; a sink that panics is
/// contained and cannot change the outcome of a call.
pub trait Logger: Send + Sync {
    /// General informational channel.
    fn log(&self, message: &str);
    /// Failure channel.
    fn error(&self, message: &str);
    /// Request/response tracing channel.
    fn debug(&self, message: &str);
}

/// Default sink: forwards each channel to the matching `tracing` macro.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "habitify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "habitify", "{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!(target: "habitify", "{message}");
    }
}

/// Sink that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Shared handle the request pipeline emits through.
///
/// Wraps every call in `catch_unwind` so a faulty sink is swallowed
/// silently, per the pipeline contract.
#[derive(Clone)]
pub(crate) struct LogSink {
    inner: Arc<dyn Logger>,
}

impl LogSink {
    pub(crate) fn new(inner: Arc<dyn Logger>) -> Self {
        Self { inner }
    }

    pub(crate) fn error(&self, message: &str) {
        swallow(|| self.inner.error(message));
    }

    pub(crate) fn debug(&self, message: &str) {
        swallow(|| self.inner.debug(message));
    }
}

fn swallow(emit: impl FnOnce()) {
    let _ = catch_unwind(AssertUnwindSafe(emit));
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recording {
        lines: Mutex<Vec<(&'static str, String)>>,
    }

    impl Logger for Recording {
        fn log(&self, message: &str) {
            self.lines.lock().unwrap().push(("log", message.to_string()));
        }

        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(("error", message.to_string()));
        }

        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(("debug", message.to_string()));
        }
    }

    struct Exploding;

    impl Logger for Exploding {
        fn log(&self, _message: &str) {
            panic!("log channel");
        }

        fn error(&self, _message: &str) {
            panic!("error channel");
        }

        fn debug(&self, _message: &str) {
            panic!("debug channel");
        }
    }

    #[test]
    fn sink_routes_to_the_matching_channel() {
        let logger = Arc::new(Recording { lines: Mutex::new(Vec::new()) });
        let sink = LogSink::new(logger.clone());

        sink.debug("first");
        sink.error("second");

        let lines = logger.lines.lock().unwrap();
        assert_eq!(*lines, vec![("debug", "first".to_string()), ("error", "second".to_string())]);
    }

    #[test]
    fn panicking_sink_is_contained() {
        let sink = LogSink::new(Arc::new(Exploding));
        sink.debug("boom");
        sink.error("boom");
    }
}
