//! Response DTOs combining several API results

use pulse_core::entities::Event;

/// Attendee event listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBrowse {
    /// Events the user has RSVP'd to
    pub mine: Vec<Event>,
    /// Other events open to the user
    pub available: Vec<Event>,
}

impl EventBrowse {
    /// Split `all` into events already in `mine` and the rest
    pub fn new(mine: Vec<Event>, all: Vec<Event>) -> Self {
        let available = all
            .into_iter()
            .filter(|event| !mine.iter().any(|m| m.id == event.id))
            .collect();
        Self { mine, available }
    }
}
