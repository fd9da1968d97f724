//! Error mapping for HTTP responses

use pulse_core::error::DomainError;
use pulse_core::value_objects::EventId;
use reqwest::StatusCode;
use serde::Deserialize;

/// Longest server message carried into an error
const MAX_MESSAGE_LEN: usize = 200;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// Convert a reqwest error to DomainError
pub fn map_transport_error(e: reqwest::Error) -> DomainError {
    if e.is_decode() {
        DomainError::Decode(e.to_string())
    } else {
        DomainError::Network(e.to_string())
    }
}

/// Convert a JSON error to DomainError
pub fn map_decode_error(e: serde_json::Error) -> DomainError {
    DomainError::Decode(e.to_string())
}

/// Deferred "event not found" error for `map_status`
pub fn event_not_found(id: &EventId) -> impl Send + FnOnce() -> DomainError {
    let id = id.clone();
    move || DomainError::EventNotFound(id)
}

/// Map a non-success status to DomainError
///
/// 401 and 403 both mean the session is unusable; 404 defers to the caller's
/// resource-specific error.
pub fn map_status<F>(status: StatusCode, body: &[u8], on_not_found: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DomainError::Unauthorized,
        StatusCode::NOT_FOUND => on_not_found(),
        _ => DomainError::Http {
            status: status.as_u16(),
            message: server_message(status, body),
        },
    }
}

/// Extract a readable message from an error body
fn server_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) {
        return truncate(parsed.message);
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unexpected status")
            .to_string()
    } else {
        truncate(text.to_string())
    }
}

fn truncate(mut message: String) -> String {
    if message.len() > MAX_MESSAGE_LEN {
        let mut end = MAX_MESSAGE_LEN;
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        message.truncate(end);
    }
    message
}
