#![cfg(target_arch = "wasm32")]
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod contact_form;
// Accessors used only by the host tests.
#[allow(dead_code)]
mod core;
mod dom;
mod lyrics_player;
mod media_gallery;
mod navbar;
mod observe;
mod orbits;
mod photo_modal;
mod read_more;
mod reveal;
mod smooth_scroll;
mod timer;
mod typing_effect;

pub use read_more::toggle_read_more;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let doc = document.clone();
        dom::listen::<web::Event>(&document, "DOMContentLoaded", move |_| init(&doc));
    } else {
        init(&document);
    }
    Ok(())
}

/// Wire every page component. A component whose elements are missing is
/// skipped as a whole and reported; the others still start.
fn init(document: &web::Document) {
    let mut rng = StdRng::from_entropy();
    let components: [(&str, anyhow::Result<()>); 10] = [
        ("navbar", navbar::init(document)),
        ("typing", typing_effect::init(document)),
        ("orbits", orbits::init(document, &mut rng)),
        ("photo modal", photo_modal::init(document)),
        ("smooth scroll", smooth_scroll::init(document)),
        ("reveal", reveal::init(document)),
        ("contact form", contact_form::init(document)),
        ("lyrics", lyrics_player::init(document)),
        ("read more", read_more::init(document)),
        ("gallery", media_gallery::init(document)),
    ];
    for (name, result) in components {
        if let Err(e) = result {
            log::error!("[init] {} disabled: {:?}", name, e);
        }
    }
}
