use backend::BrandContext;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: BrandContext,
    pub on_install_help: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let brand = &props.brand;
    let on_install_click = {
        let on_install_help = props.on_install_help.clone();
        Callback::from(move |_: MouseEvent| on_install_help.emit(()))
    };
    html! {
        <header class="header" style={format!("border-color: {}", brand.tint(0x33))}>
            <div class="container">
                <h1 style={format!("color: {}", brand.accent_color)}>{&brand.business_name}</h1>
                <span class="header-city">{&brand.city}</span>
                <button class="btn btn-secondary install-button" title="Install App" onclick={on_install_click}>
                    {"Install"}
                </button>
            </div>
        </header>
    }
}
