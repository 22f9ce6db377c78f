use backend::manifest::head_tags;
use backend::{BrandContext, PortalConfig};
use log::warn;
use yew::prelude::*;

use crate::services::location::{append_head_tags, current_pathname, set_document_title};

/// Business identity for the current page.
///
/// Renders with the configured defaults first and resolves the URL slug once
/// after mount, then updates the browser tab title to match and adds the
/// manifest, icon and theme-color tags for the deployment base path.
#[hook]
pub fn use_brand(config: &PortalConfig) -> BrandContext {
    let brand = use_state(|| BrandContext::placeholder(config));

    use_effect_with((), {
        let brand = brand.clone();
        let config = config.clone();
        move |_| {
            let resolved = BrandContext::resolve(&current_pathname(), &config);
            set_document_title(&resolved.document_title());
            if let Err(e) = append_head_tags(&head_tags(&config)) {
                warn!("Could not add head tags: {:?}", e);
            }
            brand.set(resolved);
            || ()
        }
    });

    (*brand).clone()
}
