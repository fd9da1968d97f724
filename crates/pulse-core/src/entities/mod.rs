//! Domain entities - core business objects

mod event;
mod feedback;
mod rsvp;

pub use event::{Event, EventStatus, EventStatusParseError, NewEvent};
pub use feedback::FeedbackItem;
pub use rsvp::{Attendee, Rsvp};
