use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
    pub accent_color: AttrValue,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div class="toast" role="status" style={format!("background: {}", props.accent_color)}>
                {message}
            </div>
        },
        None => html! {},
    }
}
