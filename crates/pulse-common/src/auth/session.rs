//! Session - the bearer token shared by every API-facing service

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::error::{AppError, AppResult};

/// Authentication context holding an optional bearer token
///
/// Cloning yields another handle to the same session, so signing out through
/// one handle is observed by every service holding a clone.
#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from an optional token (empty tokens are ignored)
    pub fn with_token(token: Option<String>) -> Self {
        let session = Self::new();
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            *session.token.write() = Some(token.trim().to_string());
        }
        session
    }

    /// Store a bearer token
    pub fn sign_in(&self, token: impl Into<String>) -> AppResult<()> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(AppError::InvalidToken);
        }
        *self.token.write() = Some(token);
        Ok(())
    }

    /// Clear the bearer token
    pub fn sign_out(&self) {
        *self.token.write() = None;
    }

    /// Current bearer token, if signed in
    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    /// Current bearer token, or `MissingAuth`
    pub fn require_token(&self) -> AppResult<String> {
        self.token().ok_or(AppError::MissingAuth)
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
