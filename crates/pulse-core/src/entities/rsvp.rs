//! RSVP entity - an attendee's registration for an event

/// Attendee contact details attached to an RSVP
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attendee {
    pub name: String,
    pub email: String,
}

/// RSVP entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rsvp {
    pub id: String,
    pub attendee: Attendee,
    pub checked_in: bool,
}

impl Rsvp {
    /// Check if this RSVP belongs to the given email (case-insensitive)
    pub fn is_for(&self, email: &str) -> bool {
        self.attendee.email.eq_ignore_ascii_case(email.trim())
    }

    /// Mark the attendee as checked in
    pub fn check_in(&mut self) {
        self.checked_in = true;
    }
}
