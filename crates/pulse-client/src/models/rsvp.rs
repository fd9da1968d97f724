//! RSVP wire model

use serde::Deserialize;

/// RSVP as returned by `GET /events/{id}/rsvps`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default)]
    pub attendee: AttendeeModel,
    #[serde(default)]
    pub checked_in: bool,
}

impl RsvpModel {
    /// Resolved RSVP id, if the server sent a usable one
    pub fn document_id(&self) -> Option<&str> {
        super::document_id(&self.mongo_id, &self.id)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendeeModel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}
