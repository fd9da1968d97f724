//! Remote API traits (ports) - define what the application needs from the server
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! (`pulse-client`) provides the HTTP implementation. Every call takes the
//! bearer token explicitly; callers decide what to do when there is none.

use async_trait::async_trait;

use crate::entities::{Event, EventStatus, FeedbackItem, NewEvent, Rsvp};
use crate::error::DomainError;
use crate::value_objects::{EventId, Reaction};

/// Result type for remote API operations
pub type ApiResult<T> = Result<T, DomainError>;

/// Outcome of a successful feedback submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackCreated {
    /// Server echoed the created item back
    Echoed(FeedbackItem),
    /// Server answered 2xx without a usable body
    Accepted,
}

impl FeedbackCreated {
    /// Get the echoed item, if any
    pub fn into_item(self) -> Option<FeedbackItem> {
        match self {
            Self::Echoed(item) => Some(item),
            Self::Accepted => None,
        }
    }
}

// ============================================================================
// Feedback API
// ============================================================================

#[async_trait]
pub trait FeedbackApi: Send + Sync {
    /// Fetch the current feedback snapshot for an event, in server order
    async fn list_feedback(&self, token: &str, event_id: &EventId) -> ApiResult<Vec<FeedbackItem>>;

    /// Submit a new feedback entry
    async fn submit_feedback(
        &self,
        token: &str,
        event_id: &EventId,
        content: &str,
        reaction: Reaction,
    ) -> ApiResult<FeedbackCreated>;
}

// ============================================================================
// Event API
// ============================================================================

#[async_trait]
pub trait EventApi: Send + Sync {
    /// Events hosted by the current user
    async fn list_hosted(&self, token: &str) -> ApiResult<Vec<Event>>;

    /// Every event visible to the current user
    async fn list_all(&self, token: &str) -> ApiResult<Vec<Event>>;

    /// Events the current user has RSVP'd to
    async fn list_mine(&self, token: &str) -> ApiResult<Vec<Event>>;

    /// Find an event by ID
    async fn get_event(&self, token: &str, id: &EventId) -> ApiResult<Event>;

    /// Create an event; returns the created event when the server echoes it
    async fn create_event(&self, token: &str, event: &NewEvent) -> ApiResult<Option<Event>>;

    /// Change an event's status
    async fn update_status(&self, token: &str, id: &EventId, status: EventStatus) -> ApiResult<()>;

    /// RSVP the current user to an event
    async fn rsvp(&self, token: &str, id: &EventId) -> ApiResult<()>;

    /// RSVP roster for an event
    async fn list_rsvps(&self, token: &str, id: &EventId) -> ApiResult<Vec<Rsvp>>;

    /// Check an attendee in by email
    async fn check_in(&self, token: &str, id: &EventId, attendee_email: &str) -> ApiResult<()>;
}
