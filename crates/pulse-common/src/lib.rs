//! # pulse-common
//!
//! Shared utilities including configuration, error handling, session state, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::Session;
pub use config::{
    ApiConfig, AppConfig, AppSettings, ConfigError, Environment, LiveConfig, LogConfig,
};
pub use error::{AppError, AppResult};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
