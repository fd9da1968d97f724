//! Event service integration tests
//!
//! Run with: cargo test -p integration-tests --test event_tests

use std::time::Duration;

use integration_tests::{create_event_request, rsvp_json, TestServer};
use pulse_common::Session;
use pulse_core::{EventId, EventStatus};
use pulse_service::dto::CheckInRequest;
use pulse_service::EventService;
use serde_json::json;

const POLL: Duration = Duration::from_secs(10);

#[tokio::test]
async fn test_browse_splits_mine_and_available() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    server.state.add_event("e2", "Workshop");
    server.state.add_event("e3", "Panel");

    let ctx = server.context(POLL).unwrap();
    let service = EventService::new(&ctx);
    service.rsvp(&EventId::new("e2")).await.unwrap();

    let browse = service.browse().await.unwrap();
    let mine: Vec<_> = browse.mine.iter().map(|e| e.id.as_str()).collect();
    let available: Vec<_> = browse.available.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(mine, vec!["e2"]);
    assert_eq!(available, vec!["e1", "e3"]);
}

#[tokio::test]
async fn test_create_event_round_trip() {
    let server = TestServer::start().await.expect("Failed to start server");
    let ctx = server.context(POLL).unwrap();
    let service = EventService::new(&ctx);

    let created = service
        .create_event(create_event_request("  All Hands  "))
        .await
        .unwrap()
        .expect("server echoes the event");

    assert_eq!(created.title, "All Hands");
    assert_eq!(created.max_attendees, Some(120));
    assert_eq!(created.status, EventStatus::Scheduled);

    let stored = server.state.events.lock()[0].clone();
    assert_eq!(stored["maxAttendees"], json!(120));
    assert_eq!(stored["timezone"], json!("UTC"));

    let hosted = service.hosted_events().await.unwrap();
    assert_eq!(hosted.len(), 1);
}

#[tokio::test]
async fn test_create_event_validation_is_local() {
    let server = TestServer::start().await.expect("Failed to start server");
    let ctx = server.context(POLL).unwrap();

    let mut request = create_event_request("Launch");
    request.description = "too short".to_string();

    let err = EventService::new(&ctx).create_event(request).await.unwrap_err();
    assert_eq!(err.status_code(), 400);
    assert!(server.state.events.lock().is_empty());
}

#[tokio::test]
async fn test_status_and_check_in_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    server.state.set_rsvps(
        "e1",
        json!([rsvp_json("r1", "Ada", "ada@example.com", false)]),
    );

    let ctx = server.context(POLL).unwrap();
    let service = EventService::new(&ctx);
    let id = EventId::new("e1");

    service.update_status(&id, EventStatus::Live).await.unwrap();
    assert_eq!(service.event(&id).await.unwrap().status, EventStatus::Live);

    service
        .check_in(&id, CheckInRequest::new("ada@example.com"))
        .await
        .unwrap();
    let roster = service.rsvps(&id).await.unwrap();
    assert!(roster[0].checked_in);

    let err = service
        .check_in(&id, CheckInRequest::new("nobody@example.com"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "RSVP not found: nobody@example.com");
}

#[tokio::test]
async fn test_signed_out_session_is_rejected_locally() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");

    let session = Session::with_token(Some(integration_tests::TEST_TOKEN.to_string()));
    let ctx = server.context_with_session(session.clone(), POLL).unwrap();
    let service = EventService::new(&ctx);
    assert_eq!(service.hosted_events().await.unwrap().len(), 1);

    session.sign_out();
    let err = service.hosted_events().await.unwrap_err();
    assert!(err.is_unauthenticated());
    assert_eq!(server.state.unauthorized_requests(), 0);
}

#[tokio::test]
async fn test_expired_token_maps_to_unauthenticated() {
    let server = TestServer::start().await.expect("Failed to start server");
    let ctx = server
        .context_with_session(Session::with_token(Some("expired".to_string())), POLL)
        .unwrap();

    let err = EventService::new(&ctx).browse().await.unwrap_err();
    assert!(err.is_unauthenticated());
    assert_eq!(err.status_code(), 401);
}
