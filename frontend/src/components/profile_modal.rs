use backend::domain::catalog;
use shared::ProfileDetails;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_portal::ProfileFormView;

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    pub form: Option<ProfileFormView>,
    pub accent_color: AttrValue,
    pub on_name: Callback<String>,
    pub on_concern: Callback<String>,
    pub on_breed: Callback<String>,
    pub on_notes: Callback<String>,
    pub on_save: Callback<()>,
    pub on_close: Callback<()>,
}

/// Create/edit form for a patient or pet profile
#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    let Some(form) = &props.form else {
        return html! {};
    };

    let on_name_input = {
        let on_name = props.on_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_name.emit(input.value());
        })
    };
    let on_notes_input = {
        let on_notes = props.on_notes.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            on_notes.emit(input.value());
        })
    };
    let on_submit = {
        let on_save = props.on_save.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_save.emit(());
        })
    };
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let details_field = match &form.draft.details {
        ProfileDetails::Patient { concern } => {
            let on_change = {
                let on_concern = props.on_concern.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    on_concern.emit(select.value());
                })
            };
            html! {
                <div class="form-group">
                    <label for="profile-concern">{"Primary Concern"}</label>
                    <select id="profile-concern" onchange={on_change}>
                        <option value="" selected={concern.is_empty()}>{"Select a concern"}</option>
                        {for catalog::concern_choices(form.concern_options, concern).into_iter().map(|option| html! {
                            <option value={option.to_string()} selected={concern.as_str() == option}>{option}</option>
                        })}
                    </select>
                </div>
            }
        }
        ProfileDetails::Pet { breed } => {
            let on_input = {
                let on_breed = props.on_breed.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_breed.emit(input.value());
                })
            };
            html! {
                <div class="form-group">
                    <label for="profile-breed">{"Breed"}</label>
                    <input
                        id="profile-breed"
                        type="text"
                        placeholder="e.g. Goldendoodle"
                        value={breed.clone()}
                        oninput={on_input}
                    />
                </div>
            }
        }
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal profile-modal" onclick={on_modal_click}>
                <h3>{if form.editing { "Edit Profile" } else { "New Profile" }}</h3>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="profile-name">{"Name"}</label>
                        <input
                            id="profile-name"
                            type="text"
                            value={form.draft.name.clone()}
                            oninput={on_name_input}
                            autofocus=true
                        />
                    </div>
                    {details_field}
                    <div class="form-group">
                        <label for="profile-notes">{"Notes"}</label>
                        <textarea
                            id="profile-notes"
                            value={form.draft.notes.clone()}
                            oninput={on_notes_input}
                        />
                    </div>
                    <div class="modal-buttons">
                        <button
                            type="submit"
                            class="btn btn-primary"
                            style={format!("background: {}", props.accent_color)}
                            disabled={!form.can_save}
                        >
                            {"Save"}
                        </button>
                        <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
