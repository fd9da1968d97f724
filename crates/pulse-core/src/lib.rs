//! # pulse-core
//!
//! Domain layer containing entities, value objects, API port traits, and domain errors.
//! This crate has zero dependencies on infrastructure (HTTP client, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Attendee, Event, EventStatus, FeedbackItem, NewEvent, Rsvp};
pub use error::DomainError;
pub use traits::{ApiResult, EventApi, FeedbackApi, FeedbackCreated};
pub use value_objects::{
    EventId, FeedbackId, IdParseError, Reaction, ReactionParseError, Sentiment,
};
