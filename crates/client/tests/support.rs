//! Shared helpers for the wiremock-backed integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use habitify_client::{HabitifyClient, HabitifyConfig, HabitifyConfigBuilder, Logger};
use serde_json::{json, Value};

/// Configuration builder preconfigured for a mock server.
pub fn config_for(base_url: &str) -> HabitifyConfigBuilder {
    HabitifyConfig::builder().api_key("test-key").base_url(base_url)
}

/// Client with test defaults against a mock server.
pub fn client_for(base_url: &str) -> HabitifyClient {
    HabitifyClient::new(config_for(base_url).build()).expect("client should build")
}

/// The uniform success wrapper.
pub fn success_envelope(data: Value) -> Value {
    json!({ "message": "Success", "data": data, "version": "v1.2", "status": true })
}

/// The uniform failure wrapper.
pub fn failure_envelope(message: &str) -> Value {
    json!({ "message": message, "data": null, "version": "v1.2", "status": false })
}

/// Logger that records every line per channel, for observing pipeline side
/// effects.
#[derive(Clone, Default)]
pub struct RecordingLogger {
    lines: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl RecordingLogger {
    /// Lines emitted on one channel, in order.
    pub fn channel(&self, channel: &str) -> Vec<String> {
        self.lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(name, _)| *name == channel)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
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

/// Logger whose channels all panic; the pipeline must contain it.
pub struct PanickingLogger;

impl Logger for PanickingLogger {
    fn log(&self, _message: &str) {
        panic!("log sink failure");
    }

    fn error(&self, _message: &str) {
        panic!("error sink failure");
    }

    fn debug(&self, _message: &str) {
        panic!("debug sink failure");
    }
}
