//! Browser shell of the client portal.
//!
//! Everything stateful lives in the `backend` crate's [`Portal`](backend::Portal);
//! this crate wires it to `localStorage`, the page URL and Yew components.

pub mod components;
pub mod hooks;
pub mod services;

use backend::domain::catalog;
use backend::{PortalConfig, PortalVariant};
use yew::prelude::*;

use components::header::Header;
use components::install_help::InstallHelp;
use components::nav::{Nav, Tab};
use components::profile_modal::ProfileModal;
use components::profiles_tab::ProfilesTab;
use components::schedule_modal::ScheduleModal;
use components::services_tab::ServicesTab;
use components::toast::Toast;
use components::visits_tab::VisitsTab;
use hooks::use_brand::use_brand;
use hooks::use_portal::use_portal;

fn profiles_label(variant: PortalVariant) -> &'static str {
    match variant {
        PortalVariant::Dental => "Patients",
        PortalVariant::Grooming => "Pets",
    }
}

fn add_profile_label(variant: PortalVariant) -> &'static str {
    match variant {
        PortalVariant::Dental => "Add Patient",
        PortalVariant::Grooming => "Add Pet",
    }
}

fn confirm_label(variant: PortalVariant) -> &'static str {
    match variant {
        PortalVariant::Dental => "Confirm Consultation",
        PortalVariant::Grooming => "Confirm Booking",
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| PortalConfig::from_build_env());
    let brand = use_brand(&config);
    let portal = use_portal(&config);
    let active_tab = use_state(Tab::default);
    let show_install_help = use_state(|| false);

    let state = portal.state;
    let actions = portal.actions;
    let variant = state.variant;
    let accent: AttrValue = brand.accent_color.clone().into();

    let on_open_install_help = {
        let show_install_help = show_install_help.clone();
        Callback::from(move |_: ()| show_install_help.set(true))
    };
    let on_close_install_help = {
        let show_install_help = show_install_help.clone();
        Callback::from(move |_: ()| show_install_help.set(false))
    };

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab: Tab| active_tab.set(tab))
    };

    let body = match *active_tab {
        Tab::Services => html! {
            <ServicesTab
                services={state.services.clone()}
                call_to_action={catalog::booking_call_to_action(variant)}
                accent_color={accent.clone()}
                on_book={actions.propose_booking.clone()}
            />
        },
        Tab::Visits => html! {
            <VisitsTab
                bookings={state.bookings.clone()}
                on_reschedule={actions.edit_booking.clone()}
                on_delete={actions.delete_booking.clone()}
            />
        },
        Tab::Profiles => html! {
            <ProfilesTab
                profiles={state.profiles.clone()}
                add_label={add_profile_label(variant)}
                on_add={actions.open_profile_for_create.clone()}
                on_edit={actions.open_profile_for_edit.clone()}
                on_delete={actions.delete_profile.clone()}
            />
        },
    };

    html! {
        <div class="app">
            <Header brand={brand.clone()} on_install_help={on_open_install_help} />
            <main class="container">{body}</main>
            <Nav
                active={*active_tab}
                profiles_label={profiles_label(variant)}
                accent_color={accent.clone()}
                on_select={on_select_tab}
            />
            <ScheduleModal
                view={state.scheduling.clone()}
                accent_color={accent.clone()}
                confirm_label={confirm_label(variant)}
                on_select_date={actions.select_date.clone()}
                on_select_time={actions.select_time.clone()}
                on_confirm={actions.confirm_booking.clone()}
                on_cancel={actions.cancel_booking.clone()}
            />
            <ProfileModal
                form={state.profile_form.clone()}
                accent_color={accent.clone()}
                on_name={actions.set_profile_name.clone()}
                on_concern={actions.set_profile_concern.clone()}
                on_breed={actions.set_profile_breed.clone()}
                on_notes={actions.set_profile_notes.clone()}
                on_save={actions.save_profile.clone()}
                on_close={actions.close_profile.clone()}
            />
            <InstallHelp is_open={*show_install_help} on_close={on_close_install_help} />
            <Toast message={state.toast.clone()} accent_color={accent} />
        </div>
    }
}
