use crate::core::scroll::{anchor_target_id, scroll_offset};
use crate::dom;
use web_sys as web;

/// In-page anchors scroll smoothly, leaving room for the fixed header.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let anchors: Vec<web::Element> = dom::query_all(document, "a[href^=\"#\"]")?;
    for anchor in &anchors {
        let link = anchor.clone();
        let doc = document.clone();
        dom::listen::<web::MouseEvent>(anchor, "click", move |ev| {
            ev.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| doc.get_element_by_id(id))
            else {
                return;
            };
            let Some(window) = web::window() else {
                return;
            };
            let top = target.get_bounding_client_rect().top();
            let page_y = window.page_y_offset().unwrap_or(0.0);
            let opts = web::ScrollToOptions::new();
            opts.set_top(scroll_offset(top, page_y));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        });
    }
    Ok(())
}
