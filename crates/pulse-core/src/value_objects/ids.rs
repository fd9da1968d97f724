//! Opaque identifiers assigned by the remote API
//!
//! The server hands out string ids (document ids for events, arbitrary strings
//! for feedback). The client never interprets them beyond non-emptiness.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Error when parsing an identifier from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdParseError {
    #[error("identifier must not be empty")]
    Empty,
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a raw string without validation
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Parse an id, rejecting empty or whitespace-only input
            pub fn parse(s: &str) -> Result<Self, IdParseError> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(IdParseError::Empty);
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Borrow the raw string
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the raw string
            #[inline]
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Check if the id is empty (never true for parsed ids)
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = IdParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Event identifier
    EventId
);

opaque_id!(
    /// Feedback item identifier
    FeedbackId
);

impl FeedbackId {
    /// Prefix used for ids synthesized before the server confirms an item
    pub const LOCAL_PREFIX: &'static str = "feedback-";

    /// Synthesize a local id of the form `feedback-<unix millis>-<seq>`
    ///
    /// The sequence is process-wide, so two ids synthesized within the same
    /// millisecond still differ.
    pub fn synthesize(at: DateTime<Utc>) -> Self {
        static SEQ: AtomicU64 = AtomicU64::new(0);

        let seq = SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!(
            "{}{}-{}",
            Self::LOCAL_PREFIX,
            at.timestamp_millis(),
            seq
        ))
    }

    /// Check if this id was synthesized client-side
    #[inline]
    pub fn is_local(&self) -> bool {
        self.0.starts_with(Self::LOCAL_PREFIX)
    }
}
