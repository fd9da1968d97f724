//! Value objects - immutable types that represent domain concepts

mod ids;
mod reaction;

pub use ids::{EventId, FeedbackId, IdParseError};
pub use reaction::{Reaction, ReactionParseError, Sentiment};
