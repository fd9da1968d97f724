//! Service context - dependency container for services
//!
//! Holds the API ports, the session, and live polling settings.

use std::sync::Arc;
use std::time::Duration;

use pulse_common::{AppConfig, Session};
use pulse_core::traits::{EventApi, FeedbackApi};

use super::error::{ServiceError, ServiceResult};

/// Default live feedback refresh period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Service context containing all dependencies
///
/// Cheap to clone; every clone shares the same API clients and session.
#[derive(Clone)]
pub struct ServiceContext {
    // API ports
    feedback_api: Arc<dyn FeedbackApi>,
    event_api: Arc<dyn EventApi>,

    // Authentication
    session: Session,

    // Live polling
    poll_interval: Duration,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        feedback_api: Arc<dyn FeedbackApi>,
        event_api: Arc<dyn EventApi>,
        session: Session,
        poll_interval: Duration,
    ) -> Self {
        Self {
            feedback_api,
            event_api,
            session,
            poll_interval,
        }
    }

    // === API Ports ===

    /// Get the feedback API
    pub fn feedback_api(&self) -> &Arc<dyn FeedbackApi> {
        &self.feedback_api
    }

    /// Get the event API
    pub fn event_api(&self) -> &dyn EventApi {
        self.event_api.as_ref()
    }

    // === Session ===

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Current bearer token, or `Unauthenticated`
    pub fn require_token(&self) -> ServiceResult<String> {
        self.session.require_token().map_err(ServiceError::from)
    }

    // === Settings ===

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("apis", &"...")
            .field("session", &self.session)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    feedback_api: Option<Arc<dyn FeedbackApi>>,
    event_api: Option<Arc<dyn EventApi>>,
    session: Option<Session>,
    poll_interval: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            feedback_api: None,
            event_api: None,
            session: None,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Seed session and polling settings from application config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .session(Session::with_token(config.token.clone()))
            .poll_interval(config.live.poll_interval())
    }

    /// Use one client for every API port
    pub fn api<T>(self, api: Arc<T>) -> Self
    where
        T: FeedbackApi + EventApi + 'static,
    {
        self.feedback_api(api.clone()).event_api(api)
    }

    pub fn feedback_api(mut self, api: Arc<dyn FeedbackApi>) -> Self {
        self.feedback_api = Some(api);
        self
    }

    pub fn event_api(mut self, api: Arc<dyn EventApi>) -> Self {
        self.event_api = Some(api);
        self
    }

    pub fn session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if an API port is missing or the
    /// poll interval is zero
    pub fn build(self) -> ServiceResult<ServiceContext> {
        if self.poll_interval.is_zero() {
            return Err(ServiceError::validation("poll_interval must be positive"));
        }

        Ok(ServiceContext::new(
            self.feedback_api
                .ok_or_else(|| ServiceError::validation("feedback_api is required"))?,
            self.event_api
                .ok_or_else(|| ServiceError::validation("event_api is required"))?,
            self.session.unwrap_or_default(),
            self.poll_interval,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
