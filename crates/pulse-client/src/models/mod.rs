//! Wire models
//!
//! Request bodies and response shapes exactly as the remote API speaks them.

mod event;
mod feedback;
mod rsvp;

pub use event::{CheckInBody, CreateEventBody, CreatedByModel, EventModel, StatusBody};
pub use feedback::{FeedbackModel, SubmitFeedbackBody};
pub use rsvp::{AttendeeModel, RsvpModel};

/// Pick a document's id, preferring the stored `_id` over the virtual `id`
///
/// Servers with id virtuals enabled send both keys; older ones send only one.
/// Blank values count as missing.
pub(crate) fn document_id<'a>(
    mongo_id: &'a Option<String>,
    id: &'a Option<String>,
) -> Option<&'a str> {
    [mongo_id, id]
        .into_iter()
        .flatten()
        .map(|raw| raw.trim())
        .find(|raw| !raw.is_empty())
}
