use backend::manifest::HeadTag;
use log::warn;
use wasm_bindgen::JsValue;

/// Path of the current page, e.g. `/west-ashley-paws`
pub fn current_pathname() -> String {
    gloo::utils::window().location().pathname().unwrap_or_else(|e| {
        warn!("Could not read location.pathname: {:?}", e);
        String::new()
    })
}

pub fn set_document_title(title: &str) {
    gloo::utils::document().set_title(title);
}

/// Add `tags` to the document head
pub fn append_head_tags(tags: &[HeadTag]) -> Result<(), JsValue> {
    let document = gloo::utils::document();
    let Some(head) = document.head() else {
        warn!("Document has no <head>; skipping manifest and icon links");
        return Ok(());
    };

    for tag in tags {
        let element = document.create_element(tag.element)?;
        for (name, value) in &tag.attributes {
            element.set_attribute(name, value)?;
        }
        head.append_child(&element)?;
    }
    Ok(())
}
