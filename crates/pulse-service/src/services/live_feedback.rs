//! Live feedback view-model
//!
//! Keeps a periodically refreshed copy of one event's feedback stream and
//! exposes moderation actions plus derived views for the UI.
//!
//! The handle is cheap to clone; clones share one board and one poll task.
//! State sits behind a `parking_lot` mutex that is never held across an
//! `.await`. The poll task only holds a weak reference, so dropping the last
//! handle ends polling.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use pulse_core::entities::FeedbackItem;
use pulse_core::error::DomainError;
use pulse_core::traits::FeedbackCreated;
use pulse_core::value_objects::{EventId, FeedbackId, Reaction};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::SubmitFeedbackRequest;

use super::analytics::FeedbackAnalytics;
use super::board::FeedbackBoard;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::notifications::{FeedbackNotification, Notifier};

/// Unsubmitted form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub content: String,
    pub reaction: Option<Reaction>,
}

#[derive(Debug, Clone, Copy)]
enum Toggle {
    Pin,
    Flag,
}

#[derive(Default)]
struct LiveState {
    board: FeedbackBoard,
    draft: FeedbackDraft,
    event_id: Option<EventId>,
    /// Bumped on every start/stop; poll results from older loops are discarded
    generation: u64,
    poll_task: Option<JoinHandle<()>>,
}

struct Inner {
    ctx: ServiceContext,
    state: Mutex<LiveState>,
    notifier: Notifier,
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(task) = self.state.get_mut().poll_task.take() {
            task.abort();
        }
    }
}

/// Live feedback view-model
#[derive(Clone)]
pub struct LiveFeedbackViewModel {
    inner: Arc<Inner>,
}

impl LiveFeedbackViewModel {
    pub fn new(ctx: ServiceContext) -> Self {
        Self {
            inner: Arc::new(Inner {
                ctx,
                state: Mutex::new(LiveState::default()),
                notifier: Notifier::new(),
            }),
        }
    }

    // === Polling ===

    /// Start polling `event_id`, fetching immediately and then every poll interval
    ///
    /// A running loop is stopped first. Switching to a different event clears
    /// the board and the moderation overlay.
    #[instrument(skip(self))]
    pub async fn start(&self, event_id: &str) -> ServiceResult<()> {
        let event_id = EventId::parse(event_id)
            .map_err(|_| ServiceError::validation("Event id must not be empty"))?;
        self.inner.ctx.require_token()?;

        let period = self.inner.ctx.poll_interval();
        let mut state = self.inner.state.lock();

        if let Some(task) = state.poll_task.take() {
            task.abort();
        }
        if state.event_id.as_ref() != Some(&event_id) {
            state.board = FeedbackBoard::new();
            state.event_id = Some(event_id.clone());
        }
        state.generation += 1;

        let weak = Arc::downgrade(&self.inner);
        let generation = state.generation;
        state.poll_task = Some(tokio::spawn(poll_loop(
            weak,
            event_id.clone(),
            generation,
            period,
        )));

        info!(event_id = %event_id, interval_secs = period.as_secs(), "Live feedback started");
        Ok(())
    }

    /// Stop polling; a no-op when not running
    pub fn stop(&self) {
        let mut state = self.inner.state.lock();
        state.generation += 1;
        if let Some(task) = state.poll_task.take() {
            task.abort();
            info!(event_id = ?state.event_id, "Live feedback stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner
            .state
            .lock()
            .poll_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Event currently selected, if any
    pub fn event_id(&self) -> Option<EventId> {
        self.inner.state.lock().event_id.clone()
    }

    /// Receive notifications emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<FeedbackNotification> {
        self.inner.notifier.subscribe()
    }

    // === Submission ===

    /// Submit a comment and/or reaction to the selected event
    ///
    /// A missing reaction is sent as 👍. Failures leave the board and draft
    /// untouched and are also reported as a notification.
    #[instrument(skip(self, content))]
    pub async fn submit(
        &self,
        content: &str,
        reaction: Option<Reaction>,
    ) -> ServiceResult<FeedbackItem> {
        match self.try_submit(content, reaction).await {
            Ok(item) => Ok(item),
            Err(err) => {
                warn!(error = %err, "Feedback submission failed");
                self.inner
                    .notifier
                    .send(FeedbackNotification::submit_failed(&err));
                Err(err)
            }
        }
    }

    async fn try_submit(
        &self,
        content: &str,
        reaction: Option<Reaction>,
    ) -> ServiceResult<FeedbackItem> {
        let request = SubmitFeedbackRequest::new(content, reaction);
        request.validate()?;

        let token = self.inner.ctx.require_token()?;
        let event_id = self
            .event_id()
            .ok_or_else(|| ServiceError::validation("No event selected"))?;
        let reaction = request.reaction_or_default();

        let created = self
            .inner
            .ctx
            .feedback_api()
            .submit_feedback(&token, &event_id, &request.content, reaction)
            .await
            .map_err(ServiceError::submission)?;

        let item = match created {
            FeedbackCreated::Echoed(item) => item,
            FeedbackCreated::Accepted => FeedbackItem::local(request.content, reaction, Utc::now()),
        };

        let mut state = self.inner.state.lock();
        if state.event_id.as_ref() == Some(&event_id) {
            state.board.prepend(item.clone());
        }
        state.draft = FeedbackDraft::default();
        self.inner.notifier.send(FeedbackNotification::feedback_sent());

        info!(event_id = %event_id, feedback_id = %item.id, "Feedback submitted");
        Ok(item)
    }

    // === Draft ===

    pub fn set_draft_content(&self, content: impl Into<String>) {
        self.inner.state.lock().draft.content = content.into();
    }

    /// Choose a reaction; `None` clears the choice
    pub fn select_reaction(&self, reaction: Option<Reaction>) {
        self.inner.state.lock().draft.reaction = reaction;
    }

    pub fn draft(&self) -> FeedbackDraft {
        self.inner.state.lock().draft.clone()
    }

    /// Submit the current draft; it is cleared on success
    pub async fn submit_draft(&self) -> ServiceResult<FeedbackItem> {
        let draft = self.draft();
        self.submit(&draft.content, draft.reaction).await
    }

    // === Moderation ===

    /// Toggle the pinned flag; returns the new value
    pub fn pin(&self, id: &FeedbackId) -> ServiceResult<bool> {
        self.moderate(id, Toggle::Pin)
    }

    /// Same toggle as [`pin`](Self::pin)
    pub fn unpin(&self, id: &FeedbackId) -> ServiceResult<bool> {
        self.moderate(id, Toggle::Pin)
    }

    /// Toggle the flagged flag; returns the new value
    pub fn flag(&self, id: &FeedbackId) -> ServiceResult<bool> {
        self.moderate(id, Toggle::Flag)
    }

    /// Same toggle as [`flag`](Self::flag)
    pub fn unflag(&self, id: &FeedbackId) -> ServiceResult<bool> {
        self.moderate(id, Toggle::Flag)
    }

    fn moderate(&self, id: &FeedbackId, toggle: Toggle) -> ServiceResult<bool> {
        let authorized = self.inner.ctx.require_token();

        let mut state = self.inner.state.lock();
        let outcome = authorized.and_then(|_| {
            let toggled = match toggle {
                Toggle::Pin => state.board.toggle_pin(id),
                Toggle::Flag => state.board.toggle_flag(id),
            };
            toggled.ok_or_else(|| ServiceError::from(DomainError::FeedbackNotFound(id.clone())))
        });

        let notification = match (&outcome, toggle) {
            (Ok(pinned), Toggle::Pin) => FeedbackNotification::pin_toggled(*pinned),
            (Ok(flagged), Toggle::Flag) => FeedbackNotification::flag_toggled(*flagged),
            (Err(err), _) => {
                warn!(feedback_id = %id, error = %err, "Moderation failed");
                FeedbackNotification::moderation_failed(err)
            }
        };
        self.inner.notifier.send(notification);
        outcome
    }

    // === Derived views ===

    /// Items, newest first
    pub fn items(&self) -> Vec<FeedbackItem> {
        self.inner.state.lock().board.items().to_vec()
    }

    pub fn len(&self) -> usize {
        self.inner.state.lock().board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.lock().board.is_empty()
    }

    pub fn derive_pinned(&self) -> Vec<FeedbackItem> {
        self.inner.state.lock().board.pinned()
    }

    pub fn derive_unpinned(&self) -> Vec<FeedbackItem> {
        self.inner.state.lock().board.unpinned()
    }

    pub fn derive_flagged(&self) -> Vec<FeedbackItem> {
        self.inner.state.lock().board.flagged()
    }

    pub fn derive_reaction_counts(&self) -> BTreeMap<Reaction, usize> {
        self.inner.state.lock().board.reaction_counts()
    }

    pub fn analytics(&self) -> FeedbackAnalytics {
        FeedbackAnalytics::from_items(self.inner.state.lock().board.items())
    }
}

impl Inner {
    fn apply_poll(&self, generation: u64, result: ServiceResult<Vec<FeedbackItem>>) {
        let mut state = self.state.lock();
        if state.generation != generation {
            return;
        }

        match result {
            Ok(items) => {
                debug!(count = items.len(), "Feedback snapshot applied");
                state.board.replace_snapshot(items);
            }
            Err(err) => {
                warn!(error = %err, "Feedback poll failed");
                self.notifier.send(FeedbackNotification::load_failed(&err));
            }
        }
    }
}

impl std::fmt::Debug for LiveFeedbackViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("LiveFeedbackViewModel")
            .field("event_id", &state.event_id)
            .field("items", &state.board.len())
            .field("running", &state.poll_task.is_some())
            .finish()
    }
}

async fn poll_loop(weak: Weak<Inner>, event_id: EventId, generation: u64, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let (api, token) = match weak.upgrade() {
            Some(inner) => (inner.ctx.feedback_api().clone(), inner.ctx.session().token()),
            None => break,
        };

        let result = match token {
            Some(token) => api
                .list_feedback(&token, &event_id)
                .await
                .map_err(ServiceError::from),
            None => Err(ServiceError::Unauthenticated),
        };

        match weak.upgrade() {
            Some(inner) => inner.apply_poll(generation, result),
            None => break,
        }
    }
}
