//! # pulse-service
//!
//! Application layer containing the live feedback view-model, analytics,
//! event use cases, and request DTOs.

pub mod dto;
pub mod services;

pub use services::{
    EventService, FeedbackAnalytics, FeedbackBoard, FeedbackDraft, FeedbackNotification,
    LiveFeedbackViewModel, NotificationKind, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult,
};
