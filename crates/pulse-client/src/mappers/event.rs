//! Event model <-> entity mapper

use pulse_core::entities::{Event, EventStatus, NewEvent};
use pulse_core::error::DomainError;
use pulse_core::value_objects::EventId;
use tracing::warn;

use crate::models::{CreateEventBody, CreatedByModel, EventModel};

/// Convert EventModel to Event entity
///
/// An event without a usable id is a decode error. Unknown status strings
/// fall back to `Scheduled`.
impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        let id = model
            .document_id()
            .map(EventId::new)
            .ok_or_else(|| DomainError::Decode("event without id".to_string()))?;

        let status = match model.status.as_deref() {
            None => EventStatus::default(),
            Some(raw) => EventStatus::parse(raw).unwrap_or_else(|err| {
                warn!(event_id = %id, error = %err, "Unknown event status");
                EventStatus::default()
            }),
        };

        Ok(Event {
            id,
            title: model.title,
            description: model.description,
            date: model.date,
            location: model.location,
            status,
            max_attendees: model.max_attendees,
            rsvp_deadline: model.rsvp_deadline,
            created_by: model.created_by.and_then(CreatedByModel::into_display),
            rsvp_count: model.rsvp_count,
            checked_in_count: model.checked_in_count,
        })
    }
}

/// Borrow a NewEvent as the `POST /events` body
pub fn create_event_body(event: &NewEvent) -> CreateEventBody<'_> {
    CreateEventBody {
        title: &event.title,
        description: &event.description,
        date: event.date,
        timezone: event.timezone.as_deref(),
        location: &event.location,
        max_attendees: event.max_attendees,
        rsvp_deadline: event.rsvp_deadline,
    }
}
