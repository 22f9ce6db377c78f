use log::{debug, info};
use shared::{Booking, RecordId};

use super::ids::IdGenerator;
use super::notifications::Notice;
use super::schedule::SlotCandidates;
use crate::storage::{KeyValueStore, RecordStore, StoreError};

/// The service a visitor is requesting a slot for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSelection {
    pub service: String,
    pub price: String,
    /// Set when rescheduling an existing booking
    pub existing_id: Option<RecordId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BookingState {
    #[default]
    Idle,
    Proposing(ServiceSelection),
}

/// Draft state for requesting or rescheduling a booking.
///
/// `Idle -> Proposing -> Idle`. Nothing is written until [`confirm`](Self::confirm)
/// succeeds; [`cancel`](Self::cancel) discards the draft.
#[derive(Debug, Default)]
pub struct BookingWorkflow {
    state: BookingState,
    candidates: SlotCandidates,
    date: Option<String>,
    time: Option<String>,
}

impl BookingWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    pub fn selection(&self) -> Option<&ServiceSelection> {
        match &self.state {
            BookingState::Proposing(selection) => Some(selection),
            BookingState::Idle => None,
        }
    }

    pub fn is_proposing(&self) -> bool {
        self.selection().is_some()
    }

    pub fn candidates(&self) -> &SlotCandidates {
        &self.candidates
    }

    pub fn selected_date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    pub fn selected_time(&self) -> Option<&str> {
        self.time.as_deref()
    }

    /// Start a request for `service`, discarding any earlier draft
    pub fn propose(
        &mut self,
        service: impl Into<String>,
        price: impl Into<String>,
        existing_id: Option<RecordId>,
        candidates: SlotCandidates,
    ) {
        let selection = ServiceSelection {
            service: service.into(),
            price: price.into(),
            existing_id,
        };
        debug!("Proposing booking for {:?}", selection);
        self.state = BookingState::Proposing(selection);
        self.candidates = candidates;
        self.clear_drafts();
    }

    /// Start rescheduling an existing booking
    pub fn edit(&mut self, booking: &Booking, candidates: SlotCandidates) {
        self.propose(
            booking.service.clone(),
            booking.price.clone(),
            Some(booking.id),
            candidates,
        );
    }

    /// Pick a day; only offered days are accepted
    pub fn select_date(&mut self, date: &str) -> bool {
        if !self.is_proposing() || !self.candidates.offers_date(date) {
            return false;
        }
        self.date = Some(date.to_string());
        true
    }

    /// Pick a time; only offered times are accepted
    pub fn select_time(&mut self, time: &str) -> bool {
        if !self.is_proposing() || !self.candidates.offers_time(time) {
            return false;
        }
        self.time = Some(time.to_string());
        true
    }

    /// Whether the confirm action should be enabled
    pub fn can_confirm(&self) -> bool {
        self.is_proposing() && self.date.is_some() && self.time.is_some()
    }

    /// Commit the draft into `bookings` and persist the whole collection.
    ///
    /// Returns `Ok(None)` without touching anything when the draft is
    /// incomplete. A reschedule of a booking that no longer exists closes the
    /// draft and changes nothing.
    pub fn confirm<S: KeyValueStore>(
        &mut self,
        bookings: &mut Vec<Booking>,
        store: &RecordStore<S>,
        ids: &mut IdGenerator,
        now_millis: u64,
    ) -> Result<Option<Notice>, StoreError> {
        if !self.can_confirm() {
            return Ok(None);
        }

        let state = std::mem::take(&mut self.state);
        let (date, time) = match (self.date.take(), self.time.take()) {
            (Some(date), Some(time)) => (date, time),
            _ => return Ok(None),
        };
        let BookingState::Proposing(selection) = state else {
            return Ok(None);
        };

        let notice = match selection.existing_id {
            Some(id) => {
                let Some(booking) = bookings.iter_mut().find(|b| b.id == id) else {
                    info!("Booking {} vanished before rescheduling; nothing to update", id);
                    return Ok(None);
                };
                booking.date = date;
                booking.time = time;
                info!("Rescheduled booking {} to {} {}", id, booking.date, booking.time);
                Notice::ScheduleUpdated
            }
            None => {
                let booking = Booking {
                    id: ids.next(now_millis),
                    service: selection.service,
                    price: selection.price,
                    date,
                    time,
                };
                info!("Booked {} for {} {} (id {})", booking.service, booking.date, booking.time, booking.id);
                bookings.insert(0, booking);
                Notice::BookingConfirmed
            }
        };

        store.save(bookings.as_slice())?;
        Ok(Some(notice))
    }

    /// Leave the draft without saving
    pub fn cancel(&mut self) {
        self.state = BookingState::Idle;
        self.clear_drafts();
    }

    /// Remove a booking; removing an unknown id changes nothing
    pub fn delete<S: KeyValueStore>(
        &self,
        bookings: &mut Vec<Booking>,
        store: &RecordStore<S>,
        id: RecordId,
    ) -> Result<bool, StoreError> {
        let before = bookings.len();
        bookings.retain(|b| b.id != id);
        if bookings.len() == before {
            debug!("Delete of unknown booking {} ignored", id);
            return Ok(false);
        }
        store.save(bookings.as_slice())?;
        info!("Deleted booking {}", id);
        Ok(true)
    }

    fn clear_drafts(&mut self) {
        self.date = None;
        self.time = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PortalVariant;
    use crate::domain::schedule::ScheduleConfig;
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    const NOW: u64 = 1_762_100_000_000;

    fn candidates() -> SlotCandidates {
        let today = NaiveDate::from_ymd_opt(2025, 11, 2).unwrap();
        ScheduleConfig::for_variant(PortalVariant::Grooming).candidates(today)
    }

    fn setup() -> (BookingWorkflow, Vec<Booking>, RecordStore<MemoryStore>, IdGenerator) {
        (
            BookingWorkflow::new(),
            Vec::new(),
            RecordStore::new(MemoryStore::new()),
            IdGenerator::new(),
        )
    }

    #[test]
    fn test_confirm_creates_booking_at_head() {
        let (mut workflow, mut bookings, store, mut ids) = setup();

        workflow.propose("Bath & Brush", "$55", None, candidates());
        assert!(workflow.select_date("Nov 2"));
        assert!(workflow.select_time("09:00"));
        workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap();

        workflow.propose("Full Grooming", "$95", None, candidates());
        assert!(workflow.select_date("Nov 4"));
        assert!(workflow.select_time("12:00"));
        let notice = workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap();

        assert_eq!(notice, Some(Notice::BookingConfirmed));
        assert_eq!(bookings.len(), 2);
        let head = &bookings[0];
        assert_eq!(head.service, "Full Grooming");
        assert_eq!(head.price, "$95");
        assert_eq!(head.date, "Nov 4");
        assert_eq!(head.time, "12:00");
        assert_ne!(bookings[0].id, bookings[1].id);

        assert_eq!(store.load::<Booking>(), bookings);
        assert_eq!(workflow.state(), &BookingState::Idle);
        assert_eq!(workflow.selected_date(), None);
    }

    #[test]
    fn test_confirm_without_both_selections_is_noop() {
        let (mut workflow, mut bookings, store, mut ids) = setup();

        workflow.propose("Full Grooming", "$95", None, candidates());
        assert!(!workflow.can_confirm());
        assert_eq!(workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap(), None);

        workflow.select_date("Nov 3");
        assert!(!workflow.can_confirm());
        assert_eq!(workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap(), None);

        assert!(bookings.is_empty());
        assert!(!store.backend().contains_key("nexus_vault_data"));
        assert!(workflow.is_proposing());
        assert_eq!(workflow.selected_date(), Some("Nov 3"));
    }

    #[test]
    fn test_selection_outside_candidates_is_rejected() {
        let mut workflow = BookingWorkflow::new();
        assert!(!workflow.select_date("Nov 3"), "idle workflow takes no selections");

        workflow.propose("Nail Trim", "$20", None, candidates());
        assert!(!workflow.select_date("Dec 25"));
        assert!(!workflow.select_time("Midnight"));
        assert_eq!(workflow.selected_date(), None);
        assert_eq!(workflow.selected_time(), None);
    }

    #[test]
    fn test_propose_clears_previous_draft() {
        let mut workflow = BookingWorkflow::new();
        workflow.propose("Nail Trim", "$20", None, candidates());
        workflow.select_date("Nov 3");
        workflow.select_time("15:00");

        workflow.propose("Full Grooming", "$95", None, candidates());
        assert_eq!(workflow.selected_date(), None);
        assert_eq!(workflow.selected_time(), None);
        assert_eq!(workflow.selection().unwrap().service, "Full Grooming");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let (mut workflow, mut bookings, store, mut ids) = setup();
        workflow.propose("Full Grooming", "$95", None, candidates());
        workflow.select_date("Nov 3");
        workflow.select_time("09:00");
        workflow.cancel();

        assert_eq!(workflow.state(), &BookingState::Idle);
        assert_eq!(workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap(), None);
        assert!(bookings.is_empty());
    }

    #[test]
    fn test_reschedule_updates_in_place() {
        let (mut workflow, mut bookings, store, mut ids) = setup();
        workflow.propose("Full Grooming", "$95", None, candidates());
        workflow.select_date("Nov 3");
        workflow.select_time("09:00");
        workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap();
        let original = bookings[0].clone();

        workflow.edit(&original, candidates());
        workflow.select_date("Nov 6");
        workflow.select_time("15:00");
        let notice = workflow.confirm(&mut bookings, &store, &mut ids, NOW + 10).unwrap();

        assert_eq!(notice, Some(Notice::ScheduleUpdated));
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, original.id);
        assert_eq!(bookings[0].service, original.service);
        assert_eq!(bookings[0].price, original.price);
        assert_eq!(bookings[0].date, "Nov 6");
        assert_eq!(bookings[0].time, "15:00");
        assert_eq!(store.load::<Booking>(), bookings);
    }

    #[test]
    fn test_reschedule_of_missing_booking_is_noop() {
        let (mut workflow, mut bookings, store, mut ids) = setup();
        workflow.propose("Full Grooming", "$95", Some(RecordId(404)), candidates());
        workflow.select_date("Nov 3");
        workflow.select_time("09:00");

        assert_eq!(workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap(), None);
        assert!(bookings.is_empty());
        assert!(!workflow.is_proposing());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut workflow, mut bookings, store, mut ids) = setup();
        for _ in 0..2 {
            workflow.propose("Nail Trim", "$20", None, candidates());
            workflow.select_date("Nov 3");
            workflow.select_time("09:00");
            workflow.confirm(&mut bookings, &store, &mut ids, NOW).unwrap();
        }
        let target = bookings[1].id;

        assert!(workflow.delete(&mut bookings, &store, target).unwrap());
        let after_once = bookings.clone();
        assert!(!workflow.delete(&mut bookings, &store, target).unwrap());

        assert_eq!(bookings, after_once);
        assert_eq!(bookings.len(), 1);
        assert_eq!(store.load::<Booking>(), after_once);
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let (workflow, mut bookings, store, _) = setup();
        let existing = Booking {
            id: RecordId(1),
            service: "Full Grooming".to_string(),
            price: "$95".to_string(),
            date: "Nov 3".to_string(),
            time: "09:00".to_string(),
        };
        bookings.push(existing.clone());

        assert!(!workflow.delete(&mut bookings, &store, RecordId(2)).unwrap());
        assert_eq!(bookings, vec![existing]);
    }
}
