//! End-to-end envelope interpretation through the public client surface.
//!
//! The `status` flag in the body decides success, not the HTTP status class,
//! and every operation — the multipart upload included — goes through the
//! same interpretation.

mod support;

use habitify_domain::{AddImageNoteParams, GetLogsParams, GetMoodParams, HabitifyError};
use serde_json::json;
use support::{client_for, failure_envelope, success_envelope};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn success_envelope_resolves_with_exact_data() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_envelope(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let areas = client_for(&server.uri()).get_areas().await.expect("call should succeed");

    assert!(areas.is_empty());
}

#[tokio::test]
async fn failure_flag_fails_the_call_despite_http_200() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/moods/missing"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_envelope("Not found")))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .get_mood(&GetMoodParams { mood_id: "missing".to_string() })
        .await
        .unwrap_err();

    match err {
        HabitifyError::Api { message, status_code, body } => {
            assert_eq!(message, "Not found");
            assert_eq!(status_code, Some(200));
            assert!(body.is_some());
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_message_falls_back_to_generic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_envelope("")))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_areas().await.unwrap_err();

    match err {
        HabitifyError::Api { message, .. } => assert_eq!(message, "Unknown API error"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_with_envelope_prefers_the_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/habits/h1/logs"))
        .respond_with(ResponseTemplate::new(404).set_body_json(failure_envelope("No such habit")))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .get_logs(&GetLogsParams { habit_id: "h1".to_string(), ..Default::default() })
        .await
        .unwrap_err();

    match err {
        HabitifyError::Api { message, status_code, .. } => {
            assert_eq!(message, "No such habit");
            assert_eq!(status_code, Some(404));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn error_status_without_envelope_is_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_areas().await.unwrap_err();

    match err {
        HabitifyError::Transport(message) => assert!(message.contains("500"), "{message}"),
        other => panic!("expected Transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn success_status_with_garbage_body_is_transport() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).get_areas().await.unwrap_err();

    assert!(matches!(err, HabitifyError::Transport(_)));
}

#[tokio::test]
async fn multipart_upload_flows_through_the_same_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/habits/h1/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure_envelope("Image too large")))
        .mount(&server)
        .await;

    let err = client_for(&server.uri())
        .add_image_note(&AddImageNoteParams {
            habit_id: "h1".to_string(),
            image: vec![0xFF, 0xD8, 0xFF],
            file_name: None,
            created_at: None,
        })
        .await
        .unwrap_err();

    match err {
        HabitifyError::Api { message, .. } => assert_eq!(message, "Image too large"),
        other => panic!("expected Api error, got {other:?}"),
    }
}
