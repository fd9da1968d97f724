//! RSVP model -> entity mapper

use pulse_core::entities::{Attendee, Rsvp};
use pulse_core::error::DomainError;
use serde_json::Value;
use tracing::debug;

use crate::models::RsvpModel;

/// Convert RsvpModel to Rsvp, rejecting entries without an id
impl TryFrom<RsvpModel> for Rsvp {
    type Error = DomainError;

    fn try_from(model: RsvpModel) -> Result<Self, Self::Error> {
        let id = model
            .document_id()
            .map(str::to_string)
            .ok_or_else(|| DomainError::Decode("RSVP without id".to_string()))?;

        Ok(Rsvp {
            id,
            attendee: Attendee {
                name: model.attendee.name,
                email: model.attendee.email,
            },
            checked_in: model.checked_in,
        })
    }
}

/// Map an RSVP roster body; anything other than an array is an empty roster
pub fn rsvp_roster(body: Value) -> Result<Vec<Rsvp>, DomainError> {
    if !body.is_array() {
        debug!("RSVP roster body is not an array; treating as empty");
        return Ok(Vec::new());
    }

    let models: Vec<RsvpModel> =
        serde_json::from_value(body).map_err(|e| DomainError::Decode(e.to_string()))?;
    models.into_iter().map(Rsvp::try_from).collect()
}
