//! Test fixtures and data generators
//!
//! Raw server documents in the shapes the EventPulse API sends, including
//! the legacy field names older deployments still use.

use chrono::{Duration, Utc};
use pulse_service::dto::CreateEventRequest;
use serde_json::{json, Value};

/// Event document as stored by the server
pub fn event_json(id: &str, title: &str) -> Value {
    let date = Utc::now() + Duration::days(1);
    json!({
        "_id": id,
        "title": title,
        "description": "Integration test event",
        "date": date.to_rfc3339(),
        "location": "Room 101",
        "status": "Live",
        "maxAttendees": 25,
        "rsvpDeadline": (date - Duration::hours(2)).to_rfc3339(),
        "createdBy": { "_id": "host-1", "name": "Integration Host" },
        "rsvpCount": 6,
        "checkedInCount": 4,
    })
}

/// Feedback document using the current field names
pub fn feedback_json(id: &str, content: &str, reaction: &str) -> Value {
    json!({
        "id": id,
        "content": content,
        "reaction": reaction,
        "timestamp": Utc::now().to_rfc3339(),
        "user": "Grace",
        "isPinned": false,
        "isFlagged": false,
    })
}

/// Feedback document using the legacy `_id`/`comment`/`emoji` names
pub fn legacy_feedback_json(id: &str, comment: &str, emoji: &str) -> Value {
    json!({
        "_id": id,
        "comment": comment,
        "emoji": emoji,
        "createdAt": Utc::now().to_rfc3339(),
    })
}

/// RSVP document
pub fn rsvp_json(id: &str, name: &str, email: &str, checked_in: bool) -> Value {
    json!({
        "_id": id,
        "attendee": { "name": name, "email": email },
        "checkedIn": checked_in,
    })
}

/// Valid create-event request a week out
pub fn create_event_request(title: &str) -> CreateEventRequest {
    let date = Utc::now() + Duration::days(7);
    CreateEventRequest {
        title: title.to_string(),
        description: "Quarterly all-hands with live Q&A".to_string(),
        date,
        timezone: Some("UTC".to_string()),
        location: "Auditorium".to_string(),
        max_attendees: 120,
        rsvp_deadline: date - Duration::days(1),
    }
}
