pub mod header;
pub mod install_help;
pub mod nav;
pub mod profile_modal;
pub mod profiles_tab;
pub mod schedule_modal;
pub mod services_tab;
pub mod toast;
pub mod visits_tab;
