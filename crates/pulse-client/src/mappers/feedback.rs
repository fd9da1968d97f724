//! Feedback model -> entity mapper

use std::collections::HashSet;

use chrono::Utc;
use pulse_core::entities::FeedbackItem;
use pulse_core::error::DomainError;
use pulse_core::value_objects::{FeedbackId, Reaction};
use tracing::warn;

use crate::models::FeedbackModel;

/// Convert FeedbackModel to FeedbackItem, rejecting missing ids and unknown reactions
impl TryFrom<FeedbackModel> for FeedbackItem {
    type Error = DomainError;

    fn try_from(model: FeedbackModel) -> Result<Self, Self::Error> {
        let id = model
            .document_id()
            .and_then(|raw| FeedbackId::parse(raw).ok())
            .ok_or_else(|| DomainError::ValidationError("feedback item without id".to_string()))?;

        let token = model.reaction.unwrap_or_default();
        let reaction =
            Reaction::parse(&token).map_err(|_| DomainError::InvalidReaction(token.clone()))?;

        Ok(FeedbackItem {
            id,
            content: model.content.unwrap_or_default(),
            reaction,
            timestamp: model.timestamp.unwrap_or_else(Utc::now),
            user: model
                .user
                .filter(|user| !user.trim().is_empty())
                .unwrap_or_else(|| FeedbackModel::ANONYMOUS.to_string()),
            is_pinned: model.is_pinned.unwrap_or(false),
            is_flagged: model.is_flagged.unwrap_or(false),
        })
    }
}

/// Map a server snapshot, preserving server order
///
/// Unusable items are dropped with a warning; for duplicate ids the first
/// occurrence wins.
pub fn feedback_snapshot(models: Vec<FeedbackModel>) -> Vec<FeedbackItem> {
    let mut seen = HashSet::with_capacity(models.len());

    models
        .into_iter()
        .filter_map(|model| {
            let raw_id = model.document_id().unwrap_or_default().to_string();
            match FeedbackItem::try_from(model) {
                Ok(item) => Some(item),
                Err(err) => {
                    warn!(feedback_id = %raw_id, error = %err, "Dropping feedback item");
                    None
                }
            }
        })
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}
