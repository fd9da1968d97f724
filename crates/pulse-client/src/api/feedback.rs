//! HTTP implementation of FeedbackApi

use async_trait::async_trait;
use tracing::{debug, instrument};

use pulse_core::entities::FeedbackItem;
use pulse_core::traits::{ApiResult, FeedbackApi, FeedbackCreated};
use pulse_core::value_objects::{EventId, Reaction};

use crate::mappers::feedback_snapshot;
use crate::models::{FeedbackModel, SubmitFeedbackBody};

use super::error::{event_not_found, map_decode_error};
use super::{is_blank, HttpApiClient};

#[async_trait]
impl FeedbackApi for HttpApiClient {
    #[instrument(skip(self, token))]
    async fn list_feedback(&self, token: &str, event_id: &EventId) -> ApiResult<Vec<FeedbackItem>> {
        let url = self.endpoint(&["events", event_id.as_str(), "feedback"]);
        let models: Vec<FeedbackModel> = self
            .execute_json(self.http.get(url), token, event_not_found(event_id))
            .await?;

        let received = models.len();
        let items = feedback_snapshot(models);
        debug!(received, kept = items.len(), "Fetched feedback snapshot");

        Ok(items)
    }

    #[instrument(skip(self, token, content))]
    async fn submit_feedback(
        &self,
        token: &str,
        event_id: &EventId,
        content: &str,
        reaction: Reaction,
    ) -> ApiResult<FeedbackCreated> {
        let url = self.endpoint(&["events", event_id.as_str(), "feedback"]);
        let body = SubmitFeedbackBody {
            reaction: reaction.as_str(),
            content,
        };

        let response = self
            .execute(
                self.http.post(url).json(&body),
                token,
                event_not_found(event_id),
            )
            .await?;

        if is_blank(&response) {
            return Ok(FeedbackCreated::Accepted);
        }

        // Some deployments answer with a status object instead of the item
        let created = serde_json::from_slice::<FeedbackModel>(&response)
            .map_err(map_decode_error)
            .and_then(FeedbackItem::try_from);

        match created {
            Ok(item) => Ok(FeedbackCreated::Echoed(item)),
            Err(err) => {
                debug!(error = %err, "Submission response carried no usable item");
                Ok(FeedbackCreated::Accepted)
            }
        }
    }
}
