//! Port traits implemented by infrastructure crates

mod api;

pub use api::{ApiResult, EventApi, FeedbackApi, FeedbackCreated};
