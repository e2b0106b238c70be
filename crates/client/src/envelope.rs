//! Response envelope interpretation
//!
//! Every Habitify response, success or failure, arrives wrapped in the same
//! JSON envelope. The `status` flag — not the HTTP status class — decides
//! whether a call succeeded, so interpretation is centralized here and every
//! operation funnels through it. No endpoint is exempt, the multipart image
//! upload included.

use habitify_domain::constants::UNKNOWN_API_ERROR;
use habitify_domain::{HabitifyError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Uniform wrapper around every response body.
///
/// Only `status` is required to be present: failure envelopes routinely ship
/// `data: null`, and a degraded server may omit `message` or `version`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T = Value> {
    pub message: Option<String>,
    pub data: Option<T>,
    pub version: Option<String>,
    pub status: bool,
}

/// Turn a raw response (HTTP status + body text) into a typed outcome.
///
/// - Envelope parses, `status == true`, 2xx: `data` is returned unchanged.
/// - Envelope parses, anything else: [`HabitifyError::Api`] carrying the
///   server message (or the generic fallback), the HTTP status, and the raw
///   body. An error-status response with a parseable envelope lands here
///   too — the envelope message wins over a synthesized HTTP error.
/// - Envelope does not parse: [`HabitifyError::Transport`] with the decode
///   failure and, for non-2xx responses, the HTTP status.
pub(crate) fn interpret<T: DeserializeOwned>(status_code: u16, body: &str) -> Result<T> {
    let success_class = (200..300).contains(&status_code);

    match serde_json::from_str::<Envelope<Value>>(body) {
        Ok(envelope) if envelope.status && success_class => {
            let data = envelope.data.unwrap_or(Value::Null);
            serde_json::from_value(data).map_err(|err| {
                HabitifyError::Transport(format!("failed to decode response payload: {err}"))
            })
        }
        Ok(envelope) => Err(HabitifyError::Api {
            message: envelope
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
            status_code: Some(status_code),
            body: Some(body.to_string()),
        }),
        Err(err) if success_class => {
            Err(HabitifyError::Transport(format!("unparseable response body: {err}")))
        }
        Err(err) => Err(HabitifyError::Transport(format!(
            "HTTP {status_code} with unparseable body: {err}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use habitify_domain::Area;
    use serde_json::json;

    use super::*;

    #[test]
    fn success_returns_data_unchanged() {
        let body = json!({
            "message": "Success",
            "data": [{"id": "a1", "name": "Health", "created_date": "2025-01-01T00:00:00+00:00", "priority": "1"}],
            "version": "v1.2",
            "status": true
        })
        .to_string();

        let areas: Vec<Area> = interpret(200, &body).unwrap();
        assert_eq!(areas.len(), 1);
        assert_eq!(areas[0].id, "a1");
        assert_eq!(areas[0].name, "Health");
    }

    #[test]
    fn failure_flag_wins_over_http_success() {
        let body = json!({
            "message": "Not found",
            "data": null,
            "version": "v1.2",
            "status": false
        })
        .to_string();

        let err = interpret::<Value>(200, &body).unwrap_err();
        match err {
            HabitifyError::Api { message, status_code, body } => {
                assert_eq!(message, "Not found");
                assert_eq!(status_code, Some(200));
                assert!(body.is_some());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_message_falls_back_to_generic() {
        let body = json!({"message": "", "data": null, "version": "v1.2", "status": false})
            .to_string();

        let err = interpret::<Value>(200, &body).unwrap_err();
        match err {
            HabitifyError::Api { message, .. } => assert_eq!(message, UNKNOWN_API_ERROR),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn missing_message_falls_back_to_generic() {
        let body = json!({"data": null, "status": false}).to_string();

        let err = interpret::<Value>(400, &body).unwrap_err();
        match err {
            HabitifyError::Api { message, status_code, .. } => {
                assert_eq!(message, UNKNOWN_API_ERROR);
                assert_eq!(status_code, Some(400));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn error_status_with_envelope_prefers_envelope_message() {
        // Pathological but observed: error status while the envelope still
        // claims success. The envelope message is the useful signal.
        let body = json!({"message": "Quota exceeded", "data": null, "version": "v1.2", "status": true})
            .to_string();

        let err = interpret::<Value>(429, &body).unwrap_err();
        match err {
            HabitifyError::Api { message, status_code, .. } => {
                assert_eq!(message, "Quota exceeded");
                assert_eq!(status_code, Some(429));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn error_status_without_envelope_is_transport() {
        let err = interpret::<Value>(502, "Bad Gateway").unwrap_err();
        match err {
            HabitifyError::Transport(message) => assert!(message.contains("502")),
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn success_status_with_garbage_body_is_transport() {
        let err = interpret::<Value>(200, "<html>ok</html>").unwrap_err();
        assert!(matches!(err, HabitifyError::Transport(_)));
    }

    #[test]
    fn null_data_deserializes_into_unit() {
        let body =
            json!({"message": "Success", "data": null, "version": "v1.2", "status": true})
                .to_string();

        interpret::<()>(200, &body).unwrap();
    }

    #[test]
    fn mismatched_payload_shape_is_transport() {
        let body = json!({"message": "Success", "data": {"not": "a list"}, "version": "v1.2", "status": true})
            .to_string();

        let err = interpret::<Vec<Area>>(200, &body).unwrap_err();
        assert!(matches!(err, HabitifyError::Transport(_)));
    }
}
