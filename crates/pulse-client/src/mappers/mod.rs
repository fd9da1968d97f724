//! Wire model to entity mappers
//!
//! - `TryFrom<Model> for Entity`, since any wire document may lack an id
//! - `*_body` helpers borrowing entity data for request bodies

mod event;
mod feedback;
mod rsvp;

pub use event::create_event_body;
pub use feedback::feedback_snapshot;
pub use rsvp::rsvp_roster;
