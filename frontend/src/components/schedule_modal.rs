use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_portal::SchedulingView;

#[derive(Properties, PartialEq)]
pub struct ScheduleModalProps {
    pub view: Option<SchedulingView>,
    pub accent_color: AttrValue,
    pub confirm_label: AttrValue,
    pub on_select_date: Callback<String>,
    pub on_select_time: Callback<String>,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

fn choice_buttons(
    options: &[String],
    selected: Option<&str>,
    accent_color: &str,
    on_pick: &Callback<String>,
) -> Html {
    options
        .iter()
        .map(|option| {
            let is_selected = selected == Some(option.as_str());
            let onclick = {
                let on_pick = on_pick.clone();
                let option = option.clone();
                Callback::from(move |_: MouseEvent| on_pick.emit(option.clone()))
            };
            html! {
                <button
                    class={classes!("slot-choice", is_selected.then_some("selected"))}
                    style={is_selected.then(|| format!("border-color: {}", accent_color))}
                    {onclick}
                >
                    {option}
                </button>
            }
        })
        .collect()
}

/// Date/time picker sheet for a new or rescheduled booking
#[function_component(ScheduleModal)]
pub fn schedule_modal(props: &ScheduleModalProps) -> Html {
    let Some(view) = &props.view else {
        return html! {};
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };
    let on_modal_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal schedule-modal" onclick={on_modal_click}>
                <h3>{&view.selection.service}</h3>
                <span class="service-price">{&view.selection.price}</span>

                <h4>{"Select Date"}</h4>
                <div class="slot-grid">
                    {choice_buttons(&view.dates, view.selected_date.as_deref(), &props.accent_color, &props.on_select_date)}
                </div>

                <h4>{"Select Time"}</h4>
                <div class="slot-grid">
                    {choice_buttons(&view.times, view.selected_time.as_deref(), &props.accent_color, &props.on_select_time)}
                </div>

                <button
                    class="btn btn-primary"
                    style={format!("background: {}", props.accent_color)}
                    disabled={!view.can_confirm}
                    onclick={on_confirm}
                >
                    {&props.confirm_label}
                </button>
            </div>
        </div>
    }
}
