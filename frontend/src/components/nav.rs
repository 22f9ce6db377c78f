use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Services,
    Visits,
    Profiles,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Services, Tab::Visits, Tab::Profiles];

    pub fn label(self, profiles_label: &str) -> String {
        match self {
            Tab::Services => "Services".to_string(),
            Tab::Visits => "Visits".to_string(),
            Tab::Profiles => profiles_label.to_string(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: Tab,
    pub profiles_label: AttrValue,
    pub accent_color: AttrValue,
    pub on_select: Callback<Tab>,
}

/// Bottom tab bar
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    html! {
        <nav class="tab-bar">
            {for Tab::ALL.into_iter().map(|tab| {
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(tab))
                };
                let style = (tab == props.active).then(|| format!("color: {}", props.accent_color));
                html! {
                    <button
                        class={classes!("tab", (tab == props.active).then_some("active"))}
                        style={style}
                        {onclick}
                    >
                        {tab.label(&props.profiles_label)}
                    </button>
                }
            })}
        </nav>
    }
}
