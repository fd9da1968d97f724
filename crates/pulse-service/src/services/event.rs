//! Event service
//!
//! Handles host event management, attendee browsing, RSVPs, and check-ins.

use pulse_core::entities::{Event, EventStatus, NewEvent, Rsvp};
use pulse_core::value_objects::EventId;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CheckInRequest, CreateEventRequest, EventBrowse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Events hosted by the current user
    #[instrument(skip(self))]
    pub async fn hosted_events(&self) -> ServiceResult<Vec<Event>> {
        let token = self.ctx.require_token()?;
        Ok(self.ctx.event_api().list_hosted(&token).await?)
    }

    /// Events the user has RSVP'd to, and the rest they could join
    #[instrument(skip(self))]
    pub async fn browse(&self) -> ServiceResult<EventBrowse> {
        let token = self.ctx.require_token()?;
        let api = self.ctx.event_api();

        let (mine, all) = tokio::try_join!(api.list_mine(&token), api.list_all(&token))?;
        Ok(EventBrowse::new(mine, all))
    }

    /// Get a single event
    #[instrument(skip(self))]
    pub async fn event(&self, id: &EventId) -> ServiceResult<Event> {
        let token = self.ctx.require_token()?;
        Ok(self.ctx.event_api().get_event(&token, id).await?)
    }

    /// Create an event; `None` when the server accepted it without echoing it
    #[instrument(skip(self, request))]
    pub async fn create_event(&self, request: CreateEventRequest) -> ServiceResult<Option<Event>> {
        let request = request.trimmed();
        request.validate()?;
        let token = self.ctx.require_token()?;

        let new_event = NewEvent::from(request);
        let created = self.ctx.event_api().create_event(&token, &new_event).await?;

        match &created {
            Some(event) => info!(event_id = %event.id, title = %event.title, "Event created"),
            None => info!(title = %new_event.title, "Event created without echo"),
        }
        Ok(created)
    }

    /// Change an event's status
    #[instrument(skip(self))]
    pub async fn update_status(&self, id: &EventId, status: EventStatus) -> ServiceResult<()> {
        let token = self.ctx.require_token()?;
        self.ctx.event_api().update_status(&token, id, status).await?;

        info!(event_id = %id, status = %status, "Event status updated");
        Ok(())
    }

    /// RSVP the current user
    #[instrument(skip(self))]
    pub async fn rsvp(&self, id: &EventId) -> ServiceResult<()> {
        let token = self.ctx.require_token()?;
        self.ctx.event_api().rsvp(&token, id).await?;

        info!(event_id = %id, "RSVP recorded");
        Ok(())
    }

    /// RSVP roster for an event
    #[instrument(skip(self))]
    pub async fn rsvps(&self, id: &EventId) -> ServiceResult<Vec<Rsvp>> {
        let token = self.ctx.require_token()?;
        Ok(self.ctx.event_api().list_rsvps(&token, id).await?)
    }

    /// Check an attendee in by email
    #[instrument(skip(self, request))]
    pub async fn check_in(&self, id: &EventId, request: CheckInRequest) -> ServiceResult<()> {
        let request = CheckInRequest::new(&request.attendee_email);
        request.validate()?;
        let token = self.ctx.require_token()?;

        self.ctx
            .event_api()
            .check_in(&token, id, &request.attendee_email)
            .await
            .map_err(|e| match ServiceError::from(e) {
                ServiceError::NotFound { .. } => {
                    ServiceError::not_found("RSVP", request.attendee_email.clone())
                }
                other => other,
            })?;

        info!(event_id = %id, "Attendee checked in");
        Ok(())
    }
}
