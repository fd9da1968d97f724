//! Event wire models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event as returned by the `/events` endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub rsvp_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<CreatedByModel>,
    #[serde(default)]
    pub rsvp_count: Option<u32>,
    #[serde(default)]
    pub checked_in_count: Option<u32>,
}

/// `createdBy` is either a bare user id or a populated user document
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CreatedByModel {
    Id(String),
    User {
        #[serde(default)]
        name: Option<String>,
        #[serde(default, rename = "_id")]
        mongo_id: Option<String>,
        #[serde(default)]
        id: Option<String>,
    },
}

impl EventModel {
    /// Resolved event id, if the server sent a usable one
    pub fn document_id(&self) -> Option<&str> {
        super::document_id(&self.mongo_id, &self.id)
    }
}

impl CreatedByModel {
    /// Best display value: the user's name, falling back to the id
    pub fn into_display(self) -> Option<String> {
        match self {
            Self::Id(id) => Some(id),
            Self::User { name, mongo_id, id } => name.or(mongo_id).or(id),
        }
    }
}

/// Body for `POST /events`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventBody<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<&'a str>,
    pub location: &'a str,
    pub max_attendees: u32,
    pub rsvp_deadline: DateTime<Utc>,
}

/// Body for `PATCH /events/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusBody<'a> {
    pub status: &'a str,
}

/// Body for `POST /events/{id}/checkin`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInBody<'a> {
    pub attendee_email: &'a str,
}
