//! Test helpers for integration tests
//!
//! Spawns an in-memory mock of the EventPulse API on an ephemeral port and
//! builds real `HttpApiClient`/`ServiceContext` instances against it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use chrono::Utc;
use parking_lot::Mutex;
use pulse_client::HttpApiClient;
use pulse_common::Session;
use pulse_service::{ServiceContext, ServiceContextBuilder};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::event_json;

/// Bearer token the mock accepts
pub const TEST_TOKEN: &str = "integration-token";

/// In-memory server state, inspectable from tests
#[derive(Default)]
pub struct MockState {
    pub events: Mutex<Vec<Value>>,
    pub feedback: Mutex<HashMap<String, Vec<Value>>>,
    /// Raw `/rsvps` body per event, so tests can serve malformed rosters
    pub rsvps: Mutex<HashMap<String, Value>>,
    pub mine: Mutex<Vec<String>>,
    pub checkins: Mutex<Vec<(String, String)>>,
    pub statuses: Mutex<Vec<(String, String)>>,
    /// Answer feedback submissions with an empty 201
    pub empty_submit: AtomicBool,
    /// Answer feedback listings with a 500
    pub fail_feedback: AtomicBool,
    pub feedback_requests: AtomicUsize,
    pub submit_requests: AtomicUsize,
    pub unauthorized_requests: AtomicUsize,
}

impl MockState {
    /// Register an event with an empty feedback stream
    pub fn add_event(&self, id: &str, title: &str) {
        self.events.lock().push(event_json(id, title));
        self.feedback.lock().entry(id.to_string()).or_default();
    }

    /// Append raw feedback documents to an event's stream
    pub fn add_feedback(&self, event_id: &str, items: impl IntoIterator<Item = Value>) {
        self.feedback
            .lock()
            .entry(event_id.to_string())
            .or_default()
            .extend(items);
    }

    pub fn set_rsvps(&self, event_id: &str, body: Value) {
        self.rsvps.lock().insert(event_id.to_string(), body);
    }

    pub fn feedback_requests(&self) -> usize {
        self.feedback_requests.load(Ordering::SeqCst)
    }

    pub fn submit_requests(&self) -> usize {
        self.submit_requests.load(Ordering::SeqCst)
    }

    pub fn unauthorized_requests(&self) -> usize {
        self.unauthorized_requests.load(Ordering::SeqCst)
    }

    fn has_event(&self, id: &str) -> bool {
        self.events.lock().iter().any(|e| e["_id"] == id)
    }
}

/// Mock API server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a mock server on an ephemeral port
    pub async fn start() -> Result<Self> {
        let state = Arc::new(MockState::default());
        let app = mock_router(state.clone());

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Real HTTP client pointed at the mock
    pub fn client(&self) -> Result<Arc<HttpApiClient>> {
        let client = HttpApiClient::with_timeout(&self.base_url(), Duration::from_secs(5))?;
        Ok(Arc::new(client))
    }

    /// Service context over the real client with a signed-in session
    pub fn context(&self, poll_interval: Duration) -> Result<ServiceContext> {
        self.context_with_session(Session::with_token(Some(TEST_TOKEN.to_string())), poll_interval)
    }

    pub fn context_with_session(
        &self,
        session: Session,
        poll_interval: Duration,
    ) -> Result<ServiceContext> {
        Ok(ServiceContextBuilder::new()
            .api(self.client()?)
            .session(session)
            .poll_interval(poll_interval)
            .build()?)
    }

    /// Unauthenticated raw GET, bypassing the typed client
    pub async fn raw_get(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(reqwest::get(url).await?)
    }
}

/// Wait until `check` passes or `timeout` elapses
pub async fn eventually<F>(timeout: Duration, mut check: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = tokio::time::Instant::now() + timeout;
    while tokio::time::Instant::now() < deadline {
        if check() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    check()
}

// ============================================================================
// Mock routes
// ============================================================================

type Shared = Arc<MockState>;

fn mock_router(state: Shared) -> Router {
    let api = Router::new()
        .route("/events", get(list_hosted).post(create_event))
        .route("/events/all", get(list_all))
        .route("/events/events-mine", get(list_mine))
        .route("/events/:id", get(get_event))
        .route("/events/:id/status", patch(update_status))
        .route("/events/:id/rsvp", post(rsvp))
        .route("/events/:id/rsvps", get(list_rsvps))
        .route("/events/:id/checkin", post(check_in))
        .route(
            "/events/:id/feedback",
            get(list_feedback).post(submit_feedback),
        )
        .with_state(state);

    Router::new().nest("/api", api)
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let expected = format!("Bearer {TEST_TOKEN}");
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if presented == Some(expected.as_str()) {
        Ok(())
    } else {
        state.unauthorized_requests.fetch_add(1, Ordering::SeqCst);
        Err(error(StatusCode::UNAUTHORIZED, "Not authorized, token failed"))
    }
}

async fn list_hosted(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    Json(Value::Array(state.events.lock().clone())).into_response()
}

async fn list_all(State(state): State<Shared>, headers: HeaderMap) -> Response {
    list_hosted(State(state), headers).await
}

async fn list_mine(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let mine = state.mine.lock().clone();
    let events: Vec<Value> = state
        .events
        .lock()
        .iter()
        .filter(|e| mine.iter().any(|id| e["_id"] == id.as_str()))
        .cloned()
        .collect();
    Json(events).into_response()
}

async fn get_event(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let found = state.events.lock().iter().find(|e| e["_id"] == id).cloned();
    match found {
        Some(event) => Json(event).into_response(),
        None => error(StatusCode::NOT_FOUND, "Event not found"),
    }
}

async fn create_event(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let Some(title) = body["title"].as_str().filter(|t| !t.is_empty()) else {
        return error(StatusCode::BAD_REQUEST, "Title is required");
    };

    let id = format!("evt-{}", state.events.lock().len() + 1);
    let mut event = body.clone();
    event["_id"] = json!(id);
    event["title"] = json!(title);
    event["status"] = json!("Scheduled");
    event["createdBy"] = json!({ "_id": "host-1", "name": "Integration Host" });

    state.events.lock().push(event.clone());
    state.feedback.lock().entry(id).or_default();
    (StatusCode::CREATED, Json(event)).into_response()
}

async fn update_status(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    if !state.has_event(&id) {
        return error(StatusCode::NOT_FOUND, "Event not found");
    }
    let status = body["status"].as_str().unwrap_or_default().to_string();
    for event in state.events.lock().iter_mut() {
        if event["_id"] == id.as_str() {
            event["status"] = json!(status);
        }
    }
    state.statuses.lock().push((id, status));
    StatusCode::NO_CONTENT.into_response()
}

async fn rsvp(State(state): State<Shared>, Path(id): Path<String>, headers: HeaderMap) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    if !state.has_event(&id) {
        return error(StatusCode::NOT_FOUND, "Event not found");
    }
    state.mine.lock().push(id);
    (StatusCode::CREATED, Json(json!({ "message": "RSVP confirmed" }))).into_response()
}

async fn list_rsvps(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let body = state.rsvps.lock().get(&id).cloned().unwrap_or_else(|| json!([]));
    Json(body).into_response()
}

async fn check_in(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    let email = body["attendeeEmail"].as_str().unwrap_or_default().to_string();

    let mut rsvps = state.rsvps.lock();
    let Some(entry) = rsvps
        .get_mut(&id)
        .and_then(Value::as_array_mut)
        .and_then(|list| list.iter_mut().find(|r| r["attendee"]["email"] == email.as_str()))
    else {
        return error(StatusCode::NOT_FOUND, "RSVP not found");
    };
    entry["checkedIn"] = json!(true);
    drop(rsvps);

    state.checkins.lock().push((id, email));
    Json(json!({ "message": "Checked in" })).into_response()
}

async fn list_feedback(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.feedback_requests.fetch_add(1, Ordering::SeqCst);
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }
    if state.fail_feedback.load(Ordering::SeqCst) {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "feedback store unavailable");
    }
    match state.feedback.lock().get(&id) {
        Some(items) => Json(items.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Event not found"),
    }
}

async fn submit_feedback(
    State(state): State<Shared>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.submit_requests.fetch_add(1, Ordering::SeqCst);
    if let Err(resp) = authorize(&state, &headers) {
        return resp;
    }

    let mut streams = state.feedback.lock();
    let Some(stream) = streams.get_mut(&id) else {
        return error(StatusCode::NOT_FOUND, "Event not found");
    };

    let item = json!({
        "_id": format!("fb-{}", state.submit_requests()),
        "comment": body["content"],
        "emoji": body["reaction"],
        "createdAt": Utc::now().to_rfc3339(),
        "user": "Integration User",
    });
    stream.insert(0, item.clone());

    if state.empty_submit.load(Ordering::SeqCst) {
        StatusCode::CREATED.into_response()
    } else {
        (StatusCode::CREATED, Json(item)).into_response()
    }
}
