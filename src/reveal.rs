use crate::core::tracker::{ObserverOptions, RevealKind, RevealSet};
use crate::dom;
use crate::observe;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const KEY_ATTR: &str = "data-reveal-key";

/// Slide-in reveal of `.slide-in-*` elements as they scroll into view.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let elements: Vec<web::Element> = dom::query_all(document, RevealKind::SELECTOR)?;
    let mut set = RevealSet::new();
    for el in &elements {
        let classes = el.class_list();
        let key = set.register(RevealKind::classify(|c| classes.contains(c)));
        _ = el.set_attribute(KEY_ATTR, &key.to_string());
    }
    log::info!("[reveal] {} elements", elements.len());
    let set = Rc::new(RefCell::new(set));

    observe::observe(&elements, ObserverOptions::reveal(), move |batch, observer| {
        let mut set = set.borrow_mut();
        for entry in batch {
            let target = entry.target();
            let Some(key) = target
                .get_attribute(KEY_ATTR)
                .and_then(|k| k.parse::<usize>().ok())
            else {
                continue;
            };
            let Some(style) = set.on_visibility(key, entry.is_intersecting()) else {
                continue;
            };
            if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                dom::set_style(el, "opacity", style.opacity);
                dom::set_style(el, "transform", style.transform);
            }
            observer.unobserve(&target);
        }
    })?;
    Ok(())
}
