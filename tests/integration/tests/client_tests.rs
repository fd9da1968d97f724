//! HTTP client integration tests
//!
//! Exercises `HttpApiClient` against the in-process mock API.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use integration_tests::{feedback_json, legacy_feedback_json, rsvp_json, TestServer, TEST_TOKEN};
use pulse_core::traits::{EventApi, FeedbackApi, FeedbackCreated};
use pulse_core::{DomainError, EventId, EventStatus, Reaction};
use reqwest::StatusCode;
use serde_json::json;
use std::sync::atomic::Ordering;

// ============================================================================
// Feedback
// ============================================================================

#[tokio::test]
async fn test_list_feedback_maps_current_and_legacy_shapes() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    server.state.add_feedback(
        "e1",
        [
            feedback_json("f1", "Great pacing", "👍"),
            legacy_feedback_json("f2", "Too fast", "🤔"),
            // Unknown reaction: dropped from the snapshot
            feedback_json("f3", "???", "🦀"),
            // Duplicate id: first occurrence wins
            feedback_json("f1", "dupe", "👎"),
        ],
    );

    let client = server.client().unwrap();
    let items = client
        .list_feedback(TEST_TOKEN, &EventId::new("e1"))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "f1");
    assert_eq!(items[0].user, "Grace");
    assert_eq!(items[1].reaction, Reaction::Thinking);
    assert_eq!(items[1].content, "Too fast");
    assert_eq!(items[1].user, "Anonymous");
}

#[tokio::test]
async fn test_list_feedback_accepts_documents_with_both_id_keys() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    server.state.add_feedback(
        "e1",
        [
            json!({ "_id": "f1", "id": "f1", "content": "hi", "reaction": "👍" }),
            feedback_json("f2", "Clear slides", "❤️"),
        ],
    );

    let client = server.client().unwrap();
    let items = client
        .list_feedback(TEST_TOKEN, &EventId::new("e1"))
        .await
        .unwrap();

    let ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["f1", "f2"]);
    assert_eq!(items[0].content, "hi");
}

#[tokio::test]
async fn test_list_feedback_status_mapping() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    let client = server.client().unwrap();

    let err = client
        .list_feedback("wrong-token", &EventId::new("e1"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let err = client
        .list_feedback(TEST_TOKEN, &EventId::new("missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EventNotFound(ref id) if id.as_str() == "missing"));

    server.state.fail_feedback.store(true, Ordering::SeqCst);
    let err = client
        .list_feedback(TEST_TOKEN, &EventId::new("e1"))
        .await
        .unwrap_err();
    match err {
        DomainError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "feedback store unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_submit_feedback_echo_and_empty_body() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    let client = server.client().unwrap();
    let event = EventId::new("e1");

    let created = client
        .submit_feedback(TEST_TOKEN, &event, "Loved the demo", Reaction::Heart)
        .await
        .unwrap();
    let item = created.into_item().expect("server echoes the item");
    assert_eq!(item.content, "Loved the demo");
    assert_eq!(item.reaction, Reaction::Heart);

    server.state.empty_submit.store(true, Ordering::SeqCst);
    let created = client
        .submit_feedback(TEST_TOKEN, &event, "", Reaction::ThumbsUp)
        .await
        .unwrap();
    assert_eq!(created, FeedbackCreated::Accepted);
    assert_eq!(server.state.submit_requests(), 2);
}

#[tokio::test]
async fn test_mock_rejects_missing_bearer() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");

    let response = server.raw_get("/events/e1/feedback").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(server.state.unauthorized_requests(), 1);
}

// ============================================================================
// Events
// ============================================================================

#[tokio::test]
async fn test_event_listing_endpoints() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    server.state.add_event("e2", "Workshop");
    let client = server.client().unwrap();

    assert_eq!(client.list_hosted(TEST_TOKEN).await.unwrap().len(), 2);
    assert_eq!(client.list_all(TEST_TOKEN).await.unwrap().len(), 2);
    assert!(client.list_mine(TEST_TOKEN).await.unwrap().is_empty());

    client.rsvp(TEST_TOKEN, &EventId::new("e2")).await.unwrap();
    let mine = client.list_mine(TEST_TOKEN).await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].title, "Workshop");

    let event = client.get_event(TEST_TOKEN, &EventId::new("e1")).await.unwrap();
    assert_eq!(event.status, EventStatus::Live);
    assert_eq!(event.checked_in_count, Some(4));
    assert_eq!(event.created_by.as_deref(), Some("Integration Host"));
}

#[tokio::test]
async fn test_update_status_sends_wire_name() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    let client = server.client().unwrap();

    client
        .update_status(TEST_TOKEN, &EventId::new("e1"), EventStatus::Closed)
        .await
        .unwrap();
    assert_eq!(
        server.state.statuses.lock().as_slice(),
        &[("e1".to_string(), "Closed".to_string())]
    );

    let err = client
        .update_status(TEST_TOKEN, &EventId::new("nope"), EventStatus::Live)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_rsvp_roster_shapes() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.state.add_event("e1", "Keynote");
    let client = server.client().unwrap();
    let event = EventId::new("e1");

    server.state.set_rsvps(
        "e1",
        json!([
            rsvp_json("r1", "Ada", "ada@example.com", true),
            rsvp_json("r2", "Linus", "linus@example.com", false),
        ]),
    );
    let roster = client.list_rsvps(TEST_TOKEN, &event).await.unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster[0].checked_in);
    assert_eq!(roster[1].attendee.email, "linus@example.com");

    // A non-array body is an empty roster, not an error
    server.state.set_rsvps("e1", json!({ "message": "No RSVPs yet" }));
    assert!(client.list_rsvps(TEST_TOKEN, &event).await.unwrap().is_empty());
}
