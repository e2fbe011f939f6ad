use crate::core::modal::{random_photo_url, ModalState};
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

struct Modal {
    el: web::HtmlElement,
    state: ModalState,
}

impl Modal {
    fn sync(&self) {
        dom::set_style(&self.el, "display", self.state.display());
    }
}

/// Clicking the sun shows a random placeholder photo in a modal.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let sun: web::Element = dom::require_selector(document, ".sun-core")?;
    let modal_el: web::HtmlElement = dom::require_id(document, "photo-modal")?;
    let close_btn: web::Element = dom::require_selector(document, ".close")?;
    let photo: web::HtmlImageElement = dom::require_id(document, "random-photo")?;
    let window = dom::window()?;

    let modal = Rc::new(RefCell::new(Modal {
        el: modal_el,
        state: ModalState::default(),
    }));
    let rng = Rc::new(RefCell::new(StdRng::from_entropy()));

    let m = modal.clone();
    dom::add_click_listener(&sun, move || {
        let url = random_photo_url(&mut *rng.borrow_mut());
        photo.set_src(&url);
        let mut m = m.borrow_mut();
        m.state.open();
        m.sync();
        log::debug!("[modal] showing {}", url);
    });

    let m = modal.clone();
    dom::add_click_listener(&close_btn, move || {
        let mut m = m.borrow_mut();
        m.state.close();
        m.sync();
    });

    let m = modal.clone();
    dom::listen::<web::MouseEvent>(&window, "click", move |ev| {
        let mut m = m.borrow_mut();
        let on_backdrop = ev
            .target()
            .map(|t| JsValue::from(t) == JsValue::from(m.el.clone()))
            .unwrap_or(false);
        if on_backdrop {
            m.state.close();
            m.sync();
        }
    });

    dom::listen::<web::KeyboardEvent>(&window, "keydown", move |ev| {
        let mut m = modal.borrow_mut();
        if m.state.on_key(&ev.key()) {
            m.sync();
        }
    });
    Ok(())
}
