//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use pulse_common::AppError;
use pulse_core::DomainError;
use std::fmt;
use validator::ValidationErrors;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain or remote API failure without a more specific mapping
    Domain(DomainError),

    /// Application error (config, internal, etc.)
    App(AppError),

    /// No session, or the server rejected the session
    Unauthenticated,

    /// Resource not found
    NotFound { resource: &'static str, id: String },

    /// Validation error
    Validation(String),

    /// Transport failure talking to the API
    Network(String),

    /// Feedback submission rejected or failed
    SubmissionFailed(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Unauthenticated => write!(f, "Not signed in"),
            Self::NotFound { resource, id } => write!(f, "{resource} not found: {id}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::SubmissionFailed(msg) => write!(f, "Failed to submit feedback: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a failed submission, keeping authentication failures distinct
    pub fn submission(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized => Self::Unauthenticated,
            other => Self::SubmissionFailed(other.to_string()),
        }
    }

    /// Get the HTTP-style status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for_domain(e),
            Self::App(e) => e.status_code(),
            Self::Unauthenticated => 401,
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Network(_) | Self::SubmissionFailed(_) => 502,
        }
    }

    /// Get the stable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::SubmissionFailed(_) => "SUBMISSION_FAILED",
        }
    }

    /// Check if the caller needs to sign in again
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Unauthorized => Self::Unauthenticated,
            DomainError::Network(msg) => Self::Network(msg),
            DomainError::EventNotFound(id) => Self::not_found("Event", id.into_inner()),
            DomainError::FeedbackNotFound(id) => Self::not_found("Feedback", id.into_inner()),
            DomainError::NotFound(what) => Self::not_found("Resource", what),
            e if e.is_validation() => Self::Validation(e.to_string()),
            e => Self::Domain(e),
        }
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::MissingAuth | AppError::InvalidToken => Self::Unauthenticated,
            AppError::Validation(msg) => Self::Validation(msg),
            AppError::Network(msg) => Self::Network(msg),
            AppError::Domain(e) => Self::from(e),
            e => Self::App(e),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| format!("{field} is invalid"), ToString::to_string)
                })
            })
            .collect();

        Self::Validation(messages.join("; "))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Unauthenticated => AppError::MissingAuth,
            ServiceError::NotFound { resource, id } => {
                AppError::NotFound(format!("{resource} {id}"))
            }
            ServiceError::Validation(msg) => AppError::Validation(msg),
            ServiceError::Network(msg) => AppError::Network(msg),
            ServiceError::SubmissionFailed(msg) => AppError::ExternalService(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
