use std::time::Duration;

use portal_frontend::components::install_help::{InstallHelp, InstallHelpProps};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_install_help_shows_home_screen_steps() {
    let document = gloo::utils::document();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let props = InstallHelpProps {
        is_open: true,
        on_close: Callback::noop(),
    };
    yew::Renderer::<InstallHelp>::with_root_and_props(root.clone(), props).render();
    sleep(Duration::ZERO).await;

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("Install App"));
    assert!(text.contains("Add to Home Screen"));
}
