//! Business logic services
//!
//! This module contains the view-model and service implementations that
//! handle validation, session checks, and orchestration of API calls.

pub mod analytics;
pub mod board;
pub mod context;
pub mod error;
pub mod event;
pub mod live_feedback;
pub mod notifications;


// Re-export all services for convenience
pub use analytics::{FeedbackAnalytics, KeywordCount, SentimentBreakdown};
pub use board::FeedbackBoard;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use live_feedback::{FeedbackDraft, LiveFeedbackViewModel};
pub use notifications::{FeedbackNotification, NotificationKind};
