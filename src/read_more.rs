use crate::core::read_more::{is_expanded, toggled, INLINE_HANDLER};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Expand or collapse the description block a "read more" button sits in.
/// Also exported from the wasm module; inline handlers go through the
/// `window` global installed by [`init`].
#[wasm_bindgen]
pub fn toggle_read_more(btn: web::HtmlElement) -> Result<(), JsValue> {
    toggle(&btn).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn toggle(btn: &web::HtmlElement) -> anyhow::Result<()> {
    let container = btn
        .parent_element()
        .ok_or_else(|| anyhow!("read-more button has no container"))?;
    let dots: web::HtmlElement = find(&container, ".dots")?;
    let more: web::HtmlElement = find(&container, ".more-content")?;

    let view = toggled(is_expanded(&dom::style_value(&dots, "display")));
    dom::set_style(&dots, "display", view.dots_display);
    dom::set_style(&more, "display", view.more_display);
    btn.set_inner_html(view.label);
    Ok(())
}

fn find<T: JsCast>(container: &web::Element, selector: &str) -> anyhow::Result<T> {
    container
        .query_selector(selector)
        .map_err(|e| anyhow!("bad selector {}: {:?}", selector, e))?
        .ok_or_else(|| anyhow!("missing {} in read-more block", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Install `window.toggleReadMore` for inline handlers and wire buttons
/// marked with `.read-more-btn`.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    install_global(&dom::window()?)?;

    let buttons: Vec<web::HtmlElement> = dom::query_all(document, ".read-more-btn")?;
    for btn in &buttons {
        let b = btn.clone();
        dom::add_click_listener(btn, move || {
            if let Err(e) = toggle(&b) {
                log::warn!("[read-more] {}", e);
            }
        });
    }
    Ok(())
}

fn install_global(window: &web::Window) -> anyhow::Result<()> {
    let handler = Closure::wrap(Box::new(move |btn: JsValue| {
        let Ok(btn) = btn.dyn_into::<web::HtmlElement>() else {
            log::warn!("[read-more] {} called without an element", INLINE_HANDLER);
            return;
        };
        if let Err(e) = toggle(&btn) {
            log::warn!("[read-more] {}", e);
        }
    }) as Box<dyn FnMut(JsValue)>);
    js_sys::Reflect::set(window, &JsValue::from_str(INLINE_HANDLER), handler.as_ref())
        .map_err(|e| anyhow!("set window.{}: {:?}", INLINE_HANDLER, e))?;
    handler.forget();
    Ok(())
}
