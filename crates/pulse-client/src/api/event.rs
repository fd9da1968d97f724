//! HTTP implementation of EventApi

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use pulse_core::entities::{Event, EventStatus, NewEvent, Rsvp};
use pulse_core::error::DomainError;
use pulse_core::traits::{ApiResult, EventApi};
use pulse_core::value_objects::EventId;

use crate::mappers::{create_event_body, rsvp_roster};
use crate::models::{CheckInBody, EventModel, StatusBody};

use super::error::{event_not_found, map_decode_error};
use super::{is_blank, HttpApiClient};

impl HttpApiClient {
    async fn list_events(&self, token: &str, segments: &[&'static str]) -> ApiResult<Vec<Event>> {
        let url = self.endpoint(segments);
        let path = url.path().to_string();
        let models: Vec<EventModel> = self
            .execute_json(self.http.get(url), token, move || DomainError::NotFound(path))
            .await?;

        models.into_iter().map(Event::try_from).collect()
    }
}

#[async_trait]
impl EventApi for HttpApiClient {
    #[instrument(skip(self, token))]
    async fn list_hosted(&self, token: &str) -> ApiResult<Vec<Event>> {
        self.list_events(token, &["events"]).await
    }

    #[instrument(skip(self, token))]
    async fn list_all(&self, token: &str) -> ApiResult<Vec<Event>> {
        self.list_events(token, &["events", "all"]).await
    }

    #[instrument(skip(self, token))]
    async fn list_mine(&self, token: &str) -> ApiResult<Vec<Event>> {
        self.list_events(token, &["events", "events-mine"]).await
    }

    #[instrument(skip(self, token))]
    async fn get_event(&self, token: &str, id: &EventId) -> ApiResult<Event> {
        let url = self.endpoint(&["events", id.as_str()]);
        let model: EventModel = self
            .execute_json(self.http.get(url), token, event_not_found(id))
            .await?;

        Event::try_from(model)
    }

    #[instrument(skip(self, token, event), fields(title = %event.title))]
    async fn create_event(&self, token: &str, event: &NewEvent) -> ApiResult<Option<Event>> {
        let url = self.endpoint(&["events"]);
        let body = create_event_body(event);
        let response = self
            .execute(
                self.http.post(url).json(&body),
                token,
                || DomainError::NotFound("events endpoint".to_string()),
            )
            .await?;

        if is_blank(&response) {
            return Ok(None);
        }

        match serde_json::from_slice::<EventModel>(&response)
            .map_err(map_decode_error)
            .and_then(Event::try_from)
        {
            Ok(event) => Ok(Some(event)),
            Err(err) => {
                debug!(error = %err, "Create response carried no event");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, token))]
    async fn update_status(&self, token: &str, id: &EventId, status: EventStatus) -> ApiResult<()> {
        let url = self.endpoint(&["events", id.as_str(), "status"]);
        let body = StatusBody {
            status: status.as_str(),
        };
        self.execute(self.http.patch(url).json(&body), token, event_not_found(id))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn rsvp(&self, token: &str, id: &EventId) -> ApiResult<()> {
        let url = self.endpoint(&["events", id.as_str(), "rsvp"]);
        self.execute(self.http.post(url), token, event_not_found(id))
            .await?;
        Ok(())
    }

    #[instrument(skip(self, token))]
    async fn list_rsvps(&self, token: &str, id: &EventId) -> ApiResult<Vec<Rsvp>> {
        let url = self.endpoint(&["events", id.as_str(), "rsvps"]);
        let response = self
            .execute(self.http.get(url), token, event_not_found(id))
            .await?;

        if is_blank(&response) {
            return Ok(Vec::new());
        }

        let body: Value = serde_json::from_slice(&response).map_err(map_decode_error)?;
        rsvp_roster(body)
    }

    #[instrument(skip(self, token, attendee_email))]
    async fn check_in(&self, token: &str, id: &EventId, attendee_email: &str) -> ApiResult<()> {
        let url = self.endpoint(&["events", id.as_str(), "checkin"]);
        let body = CheckInBody { attendee_email };
        self.execute(self.http.post(url).json(&body), token, event_not_found(id))
            .await?;
        Ok(())
    }
}
