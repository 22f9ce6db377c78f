use std::cell::RefCell;
use std::rc::Rc;

use backend::domain::{
    catalog, Portal, ProfileDraft, ServiceSelection, SystemClock, ToastTicket, TOAST_DURATION_MS,
};
use backend::storage::StoreError;
use backend::{PortalConfig, PortalVariant};
use gloo::timers::callback::Timeout;
use log::error;
use shared::{Booking, Profile, RecordId, ServiceOffer};
use yew::prelude::*;

use crate::services::browser_store::ClientStore;

pub type ClientPortal = Portal<ClientStore, SystemClock>;

type Outcome = Result<Option<ToastTicket>, StoreError>;

/// The open scheduling sheet
#[derive(Clone, PartialEq)]
pub struct SchedulingView {
    pub selection: ServiceSelection,
    pub dates: Vec<String>,
    pub times: Vec<String>,
    pub selected_date: Option<String>,
    pub selected_time: Option<String>,
    pub can_confirm: bool,
}

/// The open profile form
#[derive(Clone, PartialEq)]
pub struct ProfileFormView {
    pub draft: ProfileDraft,
    pub editing: bool,
    pub can_save: bool,
    pub concern_options: &'static [&'static str],
}

#[derive(Clone, PartialEq)]
pub struct PortalState {
    pub variant: PortalVariant,
    pub services: Vec<ServiceOffer>,
    pub bookings: Vec<Booking>,
    pub profiles: Vec<Profile>,
    pub scheduling: Option<SchedulingView>,
    pub profile_form: Option<ProfileFormView>,
    pub toast: Option<String>,
}

impl PortalState {
    fn capture(portal: &ClientPortal) -> Self {
        let variant = portal.config().variant;
        let booking = portal.booking_workflow();
        let profile = portal.profile_workflow();

        Self {
            variant,
            services: portal.services(),
            bookings: portal.bookings().to_vec(),
            profiles: portal.profiles().to_vec(),
            scheduling: booking.selection().map(|selection| SchedulingView {
                selection: selection.clone(),
                dates: booking.candidates().dates.clone(),
                times: booking.candidates().times.clone(),
                selected_date: booking.selected_date().map(str::to_string),
                selected_time: booking.selected_time().map(str::to_string),
                can_confirm: booking.can_confirm(),
            }),
            profile_form: profile.is_open().then(|| ProfileFormView {
                draft: profile.draft().clone(),
                editing: profile.editing().is_some(),
                can_save: profile.can_save(),
                concern_options: catalog::concern_options(variant),
            }),
            toast: portal.toast().map(str::to_string),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct PortalActions {
    pub propose_booking: Callback<ServiceOffer>,
    pub edit_booking: Callback<RecordId>,
    pub select_date: Callback<String>,
    pub select_time: Callback<String>,
    pub confirm_booking: Callback<()>,
    pub cancel_booking: Callback<()>,
    pub delete_booking: Callback<RecordId>,
    pub open_profile_for_create: Callback<()>,
    pub open_profile_for_edit: Callback<RecordId>,
    pub close_profile: Callback<()>,
    pub set_profile_name: Callback<String>,
    pub set_profile_concern: Callback<String>,
    pub set_profile_breed: Callback<String>,
    pub set_profile_notes: Callback<String>,
    pub save_profile: Callback<()>,
    pub delete_profile: Callback<RecordId>,
}

pub struct UsePortalResult {
    pub state: PortalState,
    pub actions: PortalActions,
}

/// Runs portal mutations and re-renders afterwards
#[derive(Clone)]
struct Dispatcher {
    portal: Rc<RefCell<ClientPortal>>,
    toast_timer: Rc<RefCell<Option<Timeout>>>,
    update: UseForceUpdateHandle,
}

impl Dispatcher {
    fn callback<T, F>(&self, f: F) -> Callback<T>
    where
        T: 'static,
        F: Fn(&mut ClientPortal, T) -> Outcome + 'static,
    {
        let this = self.clone();
        Callback::from(move |arg: T| this.apply(|portal| f(portal, arg)))
    }

    /// Callback for state changes that never persist or notify
    fn draft_callback<T, F>(&self, f: F) -> Callback<T>
    where
        T: 'static,
        F: Fn(&mut ClientPortal, T) + 'static,
    {
        self.callback(move |portal, arg| {
            f(portal, arg);
            Ok(None)
        })
    }

    fn apply(&self, f: impl FnOnce(&mut ClientPortal) -> Outcome) {
        let outcome = f(&mut self.portal.borrow_mut());
        match outcome {
            Ok(Some(ticket)) => self.schedule_toast_expiry(ticket),
            Ok(None) => {}
            Err(e) => error!("Failed to save local records: {}", e),
        }
        self.update.force_update();
    }

    fn schedule_toast_expiry(&self, ticket: ToastTicket) {
        let portal = self.portal.clone();
        let update = self.update.clone();
        let timeout = Timeout::new(TOAST_DURATION_MS, move || {
            if portal.borrow_mut().expire_toast(ticket) {
                update.force_update();
            }
        });
        // Dropping the previous Timeout cancels it
        *self.toast_timer.borrow_mut() = Some(timeout);
    }
}

#[hook]
pub fn use_portal(config: &PortalConfig) -> UsePortalResult {
    let portal = use_mut_ref({
        let config = config.clone();
        move || Portal::open(ClientStore::detect(), SystemClock, config)
    });
    let toast_timer = use_mut_ref(|| None::<Timeout>);
    let update = use_force_update();

    let dispatcher = Dispatcher {
        portal: portal.clone(),
        toast_timer,
        update,
    };

    let actions = PortalActions {
        propose_booking: dispatcher.draft_callback(|portal, offer: ServiceOffer| {
            portal.propose_booking(&offer.name, &offer.price)
        }),
        edit_booking: dispatcher.draft_callback(|portal, id: RecordId| {
            portal.edit_booking(id);
        }),
        select_date: dispatcher.draft_callback(|portal, date: String| {
            portal.select_date(&date);
        }),
        select_time: dispatcher.draft_callback(|portal, time: String| {
            portal.select_time(&time);
        }),
        confirm_booking: dispatcher.callback(|portal, _: ()| portal.confirm_booking()),
        cancel_booking: dispatcher.draft_callback(|portal, _: ()| portal.cancel_booking()),
        delete_booking: dispatcher.callback(|portal, id: RecordId| portal.delete_booking(id).map(|_| None)),
        open_profile_for_create: dispatcher.draft_callback(|portal, _: ()| portal.open_profile_for_create()),
        open_profile_for_edit: dispatcher.draft_callback(|portal, id: RecordId| {
            portal.open_profile_for_edit(id);
        }),
        close_profile: dispatcher.draft_callback(|portal, _: ()| portal.close_profile()),
        set_profile_name: dispatcher.draft_callback(|portal, name: String| portal.set_profile_name(&name)),
        set_profile_concern: dispatcher.draft_callback(|portal, concern: String| {
            portal.set_profile_concern(&concern);
        }),
        set_profile_breed: dispatcher.draft_callback(|portal, breed: String| {
            portal.set_profile_breed(&breed);
        }),
        set_profile_notes: dispatcher.draft_callback(|portal, notes: String| portal.set_profile_notes(&notes)),
        save_profile: dispatcher.callback(|portal, _: ()| portal.save_profile()),
        delete_profile: dispatcher.callback(|portal, id: RecordId| portal.delete_profile(id)),
    };

    let state = PortalState::capture(&portal.borrow());

    UsePortalResult { state, actions }
}
