//! Reaction - the fixed set of emoji tokens attendees can react with

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Emoji reaction attached to every feedback item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Reaction {
    #[default]
    ThumbsUp,
    ThumbsDown,
    Heart,
    Surprised,
    Thinking,
}

/// Sentiment bucket a reaction falls into for analytics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Reaction {
    /// All reactions in display order
    pub const ALL: [Reaction; 5] = [
        Self::ThumbsUp,
        Self::ThumbsDown,
        Self::Heart,
        Self::Surprised,
        Self::Thinking,
    ];

    /// Emoji token as sent on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThumbsUp => "👍",
            Self::ThumbsDown => "👎",
            Self::Heart => "❤️",
            Self::Surprised => "😮",
            Self::Thinking => "🤔",
        }
    }

    /// Human readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThumbsUp => "Thumbs Up",
            Self::ThumbsDown => "Thumbs Down",
            Self::Heart => "Heart",
            Self::Surprised => "Surprised",
            Self::Thinking => "Thinking",
        }
    }

    /// Sentiment bucket, if any. Surprise counts toward no bucket.
    pub const fn sentiment(self) -> Option<Sentiment> {
        match self {
            Self::ThumbsUp | Self::Heart => Some(Sentiment::Positive),
            Self::ThumbsDown => Some(Sentiment::Negative),
            Self::Thinking => Some(Sentiment::Neutral),
            Self::Surprised => None,
        }
    }

    /// Parse an emoji token
    pub fn parse(token: &str) -> Result<Self, ReactionParseError> {
        // Heart is accepted with or without the emoji variation selector
        match token.trim() {
            "👍" => Ok(Self::ThumbsUp),
            "👎" => Ok(Self::ThumbsDown),
            "❤️" | "❤" => Ok(Self::Heart),
            "😮" => Ok(Self::Surprised),
            "🤔" => Ok(Self::Thinking),
            other => Err(ReactionParseError::Unknown(other.to_string())),
        }
    }
}

/// Error when parsing a reaction token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReactionParseError {
    #[error("unknown reaction token: {0:?}")]
    Unknown(String),
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Reaction {
    type Err = ReactionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Reaction::parse(s)
    }
}

impl Serialize for Reaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Reaction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Reaction::parse(&token).map_err(serde::de::Error::custom)
    }
}
