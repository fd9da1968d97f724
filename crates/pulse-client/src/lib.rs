//! # pulse-client
//!
//! HTTP layer implementing the API port traits with `reqwest`.
//!
//! ## Overview
//!
//! This crate provides the remote implementation of every port trait
//! defined in `pulse-core`. It handles:
//!
//! - Client construction from `ApiConfig` (base URL, request timeout)
//! - Wire models with serde derives, tolerant of field aliases
//! - Wire model → entity mappers
//! - Status code → `DomainError` mapping
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pulse_client::HttpApiClient;
//! use pulse_core::traits::FeedbackApi;
//!
//! async fn example(config: &pulse_common::ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpApiClient::new(config)?;
//!     let items = client.list_feedback("token", &"evt-1".into()).await?;
//!     println!("{} items", items.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod mappers;
pub mod models;

pub use api::HttpApiClient;
