use shared::ServiceOffer;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ServicesTabProps {
    pub services: Vec<ServiceOffer>,
    pub call_to_action: AttrValue,
    pub accent_color: AttrValue,
    pub on_book: Callback<ServiceOffer>,
}

fn book_button(offer: &ServiceOffer, on_book: &Callback<ServiceOffer>) -> Callback<MouseEvent> {
    let offer = offer.clone();
    let on_book = on_book.clone();
    Callback::from(move |_: MouseEvent| on_book.emit(offer.clone()))
}

#[function_component(ServicesTab)]
pub fn services_tab(props: &ServicesTabProps) -> Html {
    let Some((featured, rest)) = props.services.split_first() else {
        return html! {};
    };

    html! {
        <section class="services-tab">
            <div class="featured-service" style={format!("border-color: {}", props.accent_color)}>
                <span class="service-blurb">{&featured.blurb}</span>
                <h2>{&featured.name}</h2>
                <span class="service-price">{&featured.price}</span>
                <button
                    class="btn btn-primary"
                    style={format!("background: {}", props.accent_color)}
                    onclick={book_button(featured, &props.on_book)}
                >
                    {&props.call_to_action}
                </button>
            </div>
            <ul class="service-list">
                {for rest.iter().map(|offer| html! {
                    <li class="service-row" key={offer.name.clone()}>
                        <div>
                            <span class="service-name">{&offer.name}</span>
                            <span class="service-blurb">{&offer.blurb}</span>
                        </div>
                        <button class="btn btn-secondary" onclick={book_button(offer, &props.on_book)}>
                            {&offer.price}
                        </button>
                    </li>
                })}
            </ul>
        </section>
    }
}
