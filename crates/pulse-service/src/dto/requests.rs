//! Request DTOs for user input
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use pulse_core::entities::NewEvent;
use pulse_core::value_objects::Reaction;
use serde::Deserialize;
use validator::{Validate, ValidationError};

// ============================================================================
// Feedback Requests
// ============================================================================

/// Submit feedback request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_feedback_body"))]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub content: String,

    pub reaction: Option<Reaction>,
}

impl SubmitFeedbackRequest {
    pub fn new(content: &str, reaction: Option<Reaction>) -> Self {
        Self {
            content: content.trim().to_string(),
            reaction,
        }
    }

    /// Reaction to send; a comment without one counts as a thumbs up
    pub fn reaction_or_default(&self) -> Reaction {
        self.reaction.unwrap_or_default()
    }
}

fn validate_feedback_body(req: &SubmitFeedbackRequest) -> Result<(), ValidationError> {
    if req.content.trim().is_empty() && req.reaction.is_none() {
        return Err(ValidationError::new("empty_feedback")
            .with_message(Cow::Borrowed("Add a comment or choose a reaction")));
    }
    Ok(())
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_deadline"))]
pub struct CreateEventRequest {
    #[validate(length(min = 2, message = "Title must be at least 2 characters"))]
    pub title: String,

    #[validate(length(min = 10, message = "Description must be at least 10 characters"))]
    pub description: String,

    pub date: DateTime<Utc>,

    /// IANA zone name the host picked, forwarded as-is
    #[serde(default)]
    pub timezone: Option<String>,

    #[validate(length(min = 2, message = "Location must be at least 2 characters"))]
    pub location: String,

    #[validate(range(min = 1, message = "Maximum attendees must be at least 1"))]
    pub max_attendees: u32,

    pub rsvp_deadline: DateTime<Utc>,
}

impl CreateEventRequest {
    /// Copy with surrounding whitespace removed from text fields
    pub fn trimmed(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date,
            timezone: self
                .timezone
                .as_deref()
                .map(str::trim)
                .filter(|tz| !tz.is_empty())
                .map(str::to_string),
            location: self.location.trim().to_string(),
            max_attendees: self.max_attendees,
            rsvp_deadline: self.rsvp_deadline,
        }
    }
}

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            timezone: req.timezone,
            location: req.location,
            max_attendees: req.max_attendees,
            rsvp_deadline: req.rsvp_deadline,
        }
    }
}

fn validate_deadline(req: &CreateEventRequest) -> Result<(), ValidationError> {
    if req.rsvp_deadline > req.date {
        return Err(ValidationError::new("rsvp_deadline")
            .with_message(Cow::Borrowed("RSVP deadline must not be after the event date")));
    }
    Ok(())
}

/// Check-in request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[validate(email(message = "Invalid email format"))]
    pub attendee_email: String,
}

impl CheckInRequest {
    pub fn new(attendee_email: &str) -> Self {
        Self {
            attendee_email: attendee_email.trim().to_string(),
        }
    }
}
