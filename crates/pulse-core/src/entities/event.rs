//! Event entity - a hosted event attendees RSVP to and give feedback on

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::EventId;

/// Event lifecycle status as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Scheduled,
    Live,
    Closed,
}

impl EventStatus {
    /// Wire representation
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Live => "Live",
            Self::Closed => "Closed",
        }
    }

    /// Parse a status, case-insensitively
    pub fn parse(s: &str) -> Result<Self, EventStatusParseError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "live" => Ok(Self::Live),
            "closed" => Ok(Self::Closed),
            _ => Err(EventStatusParseError(s.to_string())),
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = EventStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventStatus::parse(s)
    }
}

/// Error when parsing an event status
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown event status: {0}")]
pub struct EventStatusParseError(pub String);

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub status: EventStatus,
    pub max_attendees: Option<u32>,
    pub rsvp_deadline: Option<DateTime<Utc>>,
    pub created_by: Option<String>,
    pub rsvp_count: Option<u32>,
    pub checked_in_count: Option<u32>,
}

impl Event {
    /// Check if the event is currently live
    #[inline]
    pub fn is_live(&self) -> bool {
        self.status == EventStatus::Live
    }

    /// Check if the event is closed
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.status == EventStatus::Closed
    }

    /// Check if attendees can still RSVP at `now`
    pub fn accepts_rsvp(&self, now: DateTime<Utc>) -> bool {
        if self.is_closed() {
            return false;
        }
        self.rsvp_deadline.is_none_or(|deadline| now <= deadline)
    }

    /// Check if the RSVP count has reached the attendee cap
    pub fn is_full(&self) -> bool {
        match (self.max_attendees, self.rsvp_count) {
            (Some(max), Some(count)) => count >= max,
            _ => false,
        }
    }
}

/// Event creation payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub timezone: Option<String>,
    pub location: String,
    pub max_attendees: u32,
    pub rsvp_deadline: DateTime<Utc>,
}
