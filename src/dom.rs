use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn window() -> anyhow::Result<web::Window> {
    web::window().ok_or_else(|| anyhow!("no window"))
}

/// Element by id, cast to the expected type.
pub fn require_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{} has unexpected type: {:?}", id, e))
}

/// First element matching a selector, cast to the expected type.
pub fn require_selector<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("{} has unexpected type: {:?}", selector, e))
}

/// All elements matching a selector that are of type `T`.
pub fn query_all<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<Vec<T>> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<T>().ok())
        .collect())
}

/// Like [`query_all`] but an empty match is an error.
pub fn require_all<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<Vec<T>> {
    let found = query_all::<T>(document, selector)?;
    if found.is_empty() {
        return Err(anyhow!("missing {}", selector));
    }
    Ok(found)
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn style_value(el: &web::HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

/// Attach a typed event listener for the page lifetime.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    listen::<web::Event>(target, "click", move |_| handler());
}

pub fn alert(message: &str) {
    if let Some(w) = web::window() {
        _ = w.alert_with_message(message);
    }
}
