//! Feedback board - the in-memory feedback collection and its projections
//!
//! The board owns the newest-first list of items and a moderation overlay.
//! Pin/flag toggles exist only in this client session: they are recorded in
//! the overlay and re-applied on top of every server snapshot.

use std::collections::{BTreeMap, HashMap, HashSet};

use pulse_core::entities::FeedbackItem;
use pulse_core::value_objects::{FeedbackId, Reaction};

/// Locally toggled moderation flags; `None` leaves the server's value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Moderation {
    pinned: Option<bool>,
    flagged: Option<bool>,
}

impl Moderation {
    fn apply(self, item: &mut FeedbackItem) {
        if let Some(pinned) = self.pinned {
            item.is_pinned = pinned;
        }
        if let Some(flagged) = self.flagged {
            item.is_flagged = flagged;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    items: Vec<FeedbackItem>,
    overlay: HashMap<FeedbackId, Moderation>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a server snapshot
    ///
    /// Overlay entries for ids missing from the snapshot are discarded.
    pub fn replace_snapshot(&mut self, snapshot: Vec<FeedbackItem>) {
        let mut seen = HashSet::with_capacity(snapshot.len());
        let mut items: Vec<FeedbackItem> = snapshot
            .into_iter()
            .filter(|item| seen.insert(item.id.clone()))
            .collect();

        self.overlay.retain(|id, _| seen.contains(id));
        for item in &mut items {
            if let Some(moderation) = self.overlay.get(&item.id) {
                moderation.apply(item);
            }
        }

        self.items = items;
    }

    /// Insert an item at the front, replacing any older copy with the same id
    pub fn prepend(&mut self, mut item: FeedbackItem) {
        self.items.retain(|existing| existing.id != item.id);
        if let Some(moderation) = self.overlay.get(&item.id) {
            moderation.apply(&mut item);
        }
        self.items.insert(0, item);
    }

    /// Flip `is_pinned`; returns the new value, or `None` if the id is absent
    pub fn toggle_pin(&mut self, id: &FeedbackId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.toggle_pin();
        let pinned = item.is_pinned;
        self.overlay.entry(id.clone()).or_default().pinned = Some(pinned);
        Some(pinned)
    }

    /// Flip `is_flagged`; returns the new value, or `None` if the id is absent
    pub fn toggle_flag(&mut self, id: &FeedbackId) -> Option<bool> {
        let item = self.items.iter_mut().find(|item| &item.id == id)?;
        item.toggle_flag();
        let flagged = item.is_flagged;
        self.overlay.entry(id.clone()).or_default().flagged = Some(flagged);
        Some(flagged)
    }

    pub fn pinned(&self) -> Vec<FeedbackItem> {
        self.filtered(|item| item.is_pinned)
    }

    pub fn unpinned(&self) -> Vec<FeedbackItem> {
        self.filtered(|item| !item.is_pinned)
    }

    pub fn flagged(&self) -> Vec<FeedbackItem> {
        self.filtered(|item| item.is_flagged)
    }

    /// Count per reaction; reactions with no items are absent
    pub fn reaction_counts(&self) -> BTreeMap<Reaction, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.reaction).or_insert(0) += 1;
        }
        counts
    }

    pub fn get(&self, id: &FeedbackId) -> Option<&FeedbackItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Items, newest first
    pub fn items(&self) -> &[FeedbackItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn filtered<F>(&self, keep: F) -> Vec<FeedbackItem>
    where
        F: Fn(&FeedbackItem) -> bool,
    {
        self.items.iter().filter(|item| keep(item)).cloned().collect()
    }
}
