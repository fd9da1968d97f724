//! Notifications - user-facing messages emitted by the live feedback view-model

use tokio::sync::broadcast;

use super::error::ServiceError;

/// Buffered notifications per subscriber before the oldest are dropped
const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast-style message for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackNotification {
    pub kind: NotificationKind,
    /// Stable code, `FEEDBACK_SENT` or the failing error's code
    pub code: &'static str,
    pub title: String,
    pub message: String,
}

impl FeedbackNotification {
    fn success(code: &'static str, title: &str, message: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            code,
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    fn failure(err: &ServiceError, message: &str) -> Self {
        let message = if err.is_unauthenticated() {
            "Your session has expired. Please sign in again.".to_string()
        } else {
            format!("{message} ({err})")
        };
        Self {
            kind: NotificationKind::Error,
            code: err.error_code(),
            title: "Error".to_string(),
            message,
        }
    }

    pub fn feedback_sent() -> Self {
        Self::success(
            "FEEDBACK_SENT",
            "Feedback sent",
            "Your feedback has been submitted successfully.",
        )
    }

    pub fn pin_toggled(pinned: bool) -> Self {
        let message = if pinned {
            "The feedback has been pinned."
        } else {
            "The feedback has been unpinned."
        };
        Self::success("FEEDBACK_UPDATED", "Feedback updated", message)
    }

    pub fn flag_toggled(flagged: bool) -> Self {
        if flagged {
            Self::success(
                "FEEDBACK_FLAGGED",
                "Feedback flagged",
                "The feedback has been flagged for review.",
            )
        } else {
            Self::success(
                "FEEDBACK_UPDATED",
                "Feedback updated",
                "The feedback is no longer flagged.",
            )
        }
    }

    pub fn load_failed(err: &ServiceError) -> Self {
        Self::failure(err, "Failed to load feedback. Please try again later.")
    }

    pub fn submit_failed(err: &ServiceError) -> Self {
        Self::failure(err, "Failed to submit feedback. Please try again.")
    }

    pub fn moderation_failed(err: &ServiceError) -> Self {
        Self::failure(err, "Failed to update feedback. Please try again.")
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Fan-out of notifications to every subscriber
#[derive(Debug, Clone)]
pub(crate) struct Notifier {
    tx: broadcast::Sender<FeedbackNotification>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        let (tx, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { tx }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<FeedbackNotification> {
        self.tx.subscribe()
    }

    /// Send to current subscribers; with none, the notification is dropped
    pub(crate) fn send(&self, notification: FeedbackNotification) {
        let _ = self.tx.send(notification);
    }
}
