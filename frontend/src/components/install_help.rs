use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InstallHelpProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

/// How to add the portal to the home screen
#[function_component(InstallHelp)]
pub fn install_help(props: &InstallHelpProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    html! {
        <div class="modal-backdrop install-help" onclick={on_close.clone()}>
            <div class="modal" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <h2>{"Install App"}</h2>
                <p>{"Tap 'Share' and select 'Add to Home Screen' for the ultimate concierge experience."}</p>
                <button class="btn btn-secondary" onclick={on_close}>{"Got it"}</button>
            </div>
        </div>
    }
}
