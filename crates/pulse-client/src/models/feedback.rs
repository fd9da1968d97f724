//! Feedback wire model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Feedback item as returned by `GET /events/{id}/feedback`
///
/// Older server builds send `emoji`/`comment` instead of `reaction`/`content`
/// and may omit the moderation flags entirely. The id arrives as `_id`, `id`
/// or both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    #[serde(default, alias = "comment")]
    pub content: Option<String>,
    #[serde(default, alias = "emoji")]
    pub reaction: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
    #[serde(default)]
    pub is_flagged: Option<bool>,
}

impl FeedbackModel {
    /// Display name used when the server sends no user
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Resolved item id, if the server sent a usable one
    pub fn document_id(&self) -> Option<&str> {
        super::document_id(&self.mongo_id, &self.id)
    }
}

/// Body for `POST /events/{id}/feedback`
#[derive(Debug, Clone, Serialize)]
pub struct SubmitFeedbackBody<'a> {
    pub reaction: &'a str,
    pub content: &'a str,
}
