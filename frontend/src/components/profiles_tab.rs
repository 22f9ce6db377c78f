use shared::{Profile, RecordId};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProfilesTabProps {
    pub profiles: Vec<Profile>,
    pub add_label: AttrValue,
    pub on_add: Callback<()>,
    pub on_edit: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(ProfilesTab)]
pub fn profiles_tab(props: &ProfilesTabProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <section class="profiles-tab">
            <button class="btn btn-primary add-profile" onclick={on_add}>{&props.add_label}</button>
            {for props.profiles.iter().map(|profile| {
                let id = profile.id;
                let on_edit = {
                    let cb = props.on_edit.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id))
                };
                let on_delete = {
                    let cb = props.on_delete.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.stop_propagation();
                        cb.emit(id)
                    })
                };
                let label = profile.details.label();
                html! {
                    <div class="profile-card" key={id.value().to_string()} onclick={on_edit}>
                        <div class="profile-details">
                            <span class="profile-name">{&profile.name}</span>
                            {if label.is_empty() {
                                html! {}
                            } else {
                                html! { <span class="profile-label">{label}</span> }
                            }}
                        </div>
                        <button class="btn btn-danger" onclick={on_delete}>{"Remove"}</button>
                    </div>
                }
            })}
        </section>
    }
}
