//! Data transfer objects
//!
//! This module provides:
//! - Request DTOs with validation for user input
//! - Response DTOs combining several API results

pub mod requests;
pub mod responses;

pub use requests::{CheckInRequest, CreateEventRequest, SubmitFeedbackRequest};
pub use responses::EventBrowse;
