use log::info;
use shared::{Booking, Profile, RecordId, ServiceOffer};

use super::booking_workflow::BookingWorkflow;
use super::catalog;
use super::clock::{Clock, SystemClock};
use super::ids::IdGenerator;
use super::notifications::{Notice, ToastSlot, ToastTicket};
use super::profile_workflow::ProfileWorkflow;
use super::schedule::ScheduleConfig;
use crate::config::PortalConfig;
use crate::storage::{KeyValueStore, RecordStore, StoreError};

/// All client-side state of one loaded portal page.
///
/// Owns both collections and the store they are persisted to; the UI reads
/// through accessors and mutates only through the methods here.
#[derive(Debug)]
pub struct Portal<S, C = SystemClock> {
    config: PortalConfig,
    schedule: ScheduleConfig,
    store: RecordStore<S>,
    clock: C,
    ids: IdGenerator,
    bookings: Vec<Booking>,
    profiles: Vec<Profile>,
    booking: BookingWorkflow,
    profile: ProfileWorkflow,
    toast: ToastSlot,
}

impl<S: KeyValueStore, C: Clock> Portal<S, C> {
    /// Page-ready load of both collections from `store`
    pub fn open(store: S, clock: C, config: PortalConfig) -> Self {
        let store = RecordStore::new(store);
        let snapshot = store.load_snapshot();
        let ids = IdGenerator::seeded(
            snapshot
                .bookings
                .iter()
                .map(|b| b.id)
                .chain(snapshot.profiles.iter().map(|p| p.id)),
        );

        info!(
            "Portal ready ({:?}, {} bookings, {} profiles)",
            config.variant,
            snapshot.bookings.len(),
            snapshot.profiles.len()
        );

        Self {
            schedule: ScheduleConfig::for_variant(config.variant),
            profile: ProfileWorkflow::new(config.variant),
            booking: BookingWorkflow::new(),
            toast: ToastSlot::new(),
            bookings: snapshot.bookings,
            profiles: snapshot.profiles,
            ids,
            store,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn booking_workflow(&self) -> &BookingWorkflow {
        &self.booking
    }

    pub fn profile_workflow(&self) -> &ProfileWorkflow {
        &self.profile
    }

    pub fn services(&self) -> Vec<ServiceOffer> {
        catalog::services(self.config.variant)
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.current()
    }

    // Booking workflow

    pub fn propose_booking(&mut self, service: &str, price: &str) {
        let candidates = self.schedule.candidates(self.clock.today());
        self.booking.propose(service, price, None, candidates);
    }

    /// Start rescheduling the booking with `id`; false when it doesn't exist
    pub fn edit_booking(&mut self, id: RecordId) -> bool {
        let Some(existing) = self.bookings.iter().find(|b| b.id == id) else {
            return false;
        };
        let candidates = self.schedule.candidates(self.clock.today());
        self.booking.edit(existing, candidates);
        true
    }

    pub fn select_date(&mut self, date: &str) -> bool {
        self.booking.select_date(date)
    }

    pub fn select_time(&mut self, time: &str) -> bool {
        self.booking.select_time(time)
    }

    pub fn confirm_booking(&mut self) -> Result<Option<ToastTicket>, StoreError> {
        let now = self.clock.now_millis();
        let notice = self
            .booking
            .confirm(&mut self.bookings, &self.store, &mut self.ids, now)?;
        Ok(notice.map(|n| self.announce(n)))
    }

    pub fn cancel_booking(&mut self) {
        self.booking.cancel();
    }

    pub fn delete_booking(&mut self, id: RecordId) -> Result<bool, StoreError> {
        self.booking.delete(&mut self.bookings, &self.store, id)
    }

    // Profile workflow

    pub fn open_profile_for_create(&mut self) {
        self.profile.open_for_create();
    }

    /// Load the profile with `id` into the form; false when it doesn't exist
    pub fn open_profile_for_edit(&mut self, id: RecordId) -> bool {
        match self.profiles.iter().find(|p| p.id == id) {
            Some(existing) => {
                self.profile.open_for_edit(existing);
                true
            }
            None => false,
        }
    }

    pub fn close_profile(&mut self) {
        self.profile.close();
    }

    pub fn set_profile_name(&mut self, name: &str) {
        self.profile.set_name(name);
    }

    pub fn set_profile_concern(&mut self, concern: &str) -> bool {
        self.profile.set_concern(concern)
    }

    pub fn set_profile_breed(&mut self, breed: &str) -> bool {
        self.profile.set_breed(breed)
    }

    pub fn set_profile_notes(&mut self, notes: &str) {
        self.profile.set_notes(notes);
    }

    pub fn save_profile(&mut self) -> Result<Option<ToastTicket>, StoreError> {
        let now = self.clock.now_millis();
        let notice = self
            .profile
            .save(&mut self.profiles, &self.store, &mut self.ids, now)?;
        Ok(notice.map(|n| self.announce(n)))
    }

    pub fn delete_profile(&mut self, id: RecordId) -> Result<Option<ToastTicket>, StoreError> {
        let notice = self.profile.delete(&mut self.profiles, &self.store, id)?;
        Ok(notice.map(|n| self.announce(n)))
    }

    // Notifications

    /// Clear the toast if `ticket` is still the one showing
    pub fn expire_toast(&mut self, ticket: ToastTicket) -> bool {
        self.toast.expire(ticket)
    }

    fn announce(&mut self, notice: Notice) -> ToastTicket {
        self.toast.show(notice.message(self.config.variant))
    }
}
