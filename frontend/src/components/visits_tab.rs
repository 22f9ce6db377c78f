use shared::{Booking, RecordId};
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VisitsTabProps {
    pub bookings: Vec<Booking>,
    pub on_reschedule: Callback<RecordId>,
    pub on_delete: Callback<RecordId>,
}

#[function_component(VisitsTab)]
pub fn visits_tab(props: &VisitsTabProps) -> Html {
    if props.bookings.is_empty() {
        return html! {
            <section class="visits-tab">
                <p class="empty-state">{"No upcoming visits"}</p>
            </section>
        };
    }

    html! {
        <section class="visits-tab">
            {for props.bookings.iter().map(|booking| {
                let id = booking.id;
                let on_reschedule = {
                    let cb = props.on_reschedule.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id))
                };
                let on_delete = {
                    let cb = props.on_delete.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(id))
                };
                html! {
                    <div class="visit-card" key={id.value().to_string()}>
                        <div class="visit-details">
                            <span class="visit-service">{&booking.service}</span>
                            <span class="visit-slot">{format!("{} · {}", booking.date, booking.time)}</span>
                            <span class="visit-price">{&booking.price}</span>
                        </div>
                        <div class="visit-actions">
                            <button class="btn btn-secondary" onclick={on_reschedule}>{"Reschedule"}</button>
                            <button class="btn btn-danger" onclick={on_delete}>{"Cancel Visit"}</button>
                        </div>
                    </div>
                }
            })}
        </section>
    }
}
