use std::fmt;

use crate::config::PortalVariant;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Something the visitor should be told about after a mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    BookingConfirmed,
    ScheduleUpdated,
    ProfileAdded(String),
    ProfileUpdated,
    ProfileRemoved,
}

impl Notice {
    /// Toast text in the wording of the given deployment
    pub fn message(&self, variant: PortalVariant) -> String {
        match (self, variant) {
            (Notice::BookingConfirmed, PortalVariant::Dental) => "Consultation Confirmed".to_string(),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::BookingConfirmed => write!(f, "Booking Confirmed"),
            Notice::ScheduleUpdated => write!(f, "Schedule Updated"),
            Notice::ProfileAdded(name) => write!(f, "{} Added", name),
            Notice::ProfileUpdated => write!(f, "Profile Updated"),
            Notice::ProfileRemoved => write!(f, "Profile Removed"),
        }
    }
}

/// Identifies one showing of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTicket(u64);

/// The single toast on screen.
///
/// Showing a new toast supersedes the previous one, and an expiry scheduled
/// for a superseded toast does nothing, so a stale timer can never clear a
/// newer message early.
#[derive(Debug, Default)]
pub struct ToastSlot {
    message: Option<String>,
    generation: u64,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>) -> ToastTicket {
        self.generation += 1;
        self.message = Some(message.into());
        ToastTicket(self.generation)
    }

    /// Clear the toast if `ticket` is still the current one
    pub fn expire(&mut self, ticket: ToastTicket) -> bool {
        if ticket.0 == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
