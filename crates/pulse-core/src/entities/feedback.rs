//! Feedback entity - a reaction and optional comment left during a live event

use chrono::{DateTime, Utc};

use crate::value_objects::{FeedbackId, Reaction};

/// Feedback item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackItem {
    pub id: FeedbackId,
    pub content: String,
    pub reaction: Reaction,
    pub timestamp: DateTime<Utc>,
    pub user: String,
    pub is_pinned: bool,
    pub is_flagged: bool,
}

impl FeedbackItem {
    /// Display name used for items synthesized from the local user's submission
    pub const LOCAL_USER: &'static str = "You";

    /// Create a new FeedbackItem
    pub fn new(id: FeedbackId, content: String, reaction: Reaction, user: String) -> Self {
        Self {
            id,
            content,
            reaction,
            timestamp: Utc::now(),
            user,
            is_pinned: false,
            is_flagged: false,
        }
    }

    /// Synthesize an item for a submission the server accepted without echoing it back
    pub fn local(content: String, reaction: Reaction, at: DateTime<Utc>) -> Self {
        Self {
            id: FeedbackId::synthesize(at),
            content,
            reaction,
            timestamp: at,
            user: Self::LOCAL_USER.to_string(),
            is_pinned: false,
            is_flagged: false,
        }
    }

    /// Check if the item carries a comment (not just a reaction)
    #[inline]
    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }

    /// Check if the item was authored by the local user
    #[inline]
    pub fn is_own(&self) -> bool {
        self.user == Self::LOCAL_USER
    }

    /// Flip the pinned flag
    pub fn toggle_pin(&mut self) {
        self.is_pinned = !self.is_pinned;
    }

    /// Flip the flagged flag
    pub fn toggle_flag(&mut self) {
        self.is_flagged = !self.is_flagged;
    }

    /// Get a truncated preview of the comment (for notifications)
    pub fn preview(&self, max_len: usize) -> &str {
        if self.content.len() <= max_len {
            &self.content
        } else {
            let mut end = max_len;
            while !self.content.is_char_boundary(end) && end > 0 {
                end -= 1;
            }
            &self.content[..end]
        }
    }
}
