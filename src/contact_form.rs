use crate::core::relay::{outcome_message, RelayConfig};
use crate::dom;
use anyhow::anyhow;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

// Bindings to the EmailJS browser SDK the page loads as a global `emailjs`.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = init)]
    fn emailjs_init(public_key: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch, js_namespace = emailjs, js_name = sendForm)]
    fn emailjs_send_form(
        service_id: &str,
        template_id: &str,
        form: &web::HtmlFormElement,
    ) -> Result<js_sys::Promise, JsValue>;
}

fn relay_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("emailjs")).unwrap_or(false)
}

/// Textual detail of a relay failure; the SDK rejects with `{ status, text }`.
fn error_detail(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("text"))
        .ok()
        .and_then(|t| t.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Forward contact form submissions to the email relay.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let form: web::HtmlFormElement = dom::require_id(document, "contact-form")?;
    if !relay_loaded() {
        return Err(anyhow!("email relay SDK (emailjs) not loaded"));
    }
    let config = RelayConfig::default();
    emailjs_init(config.public_key).map_err(|e| anyhow!("emailjs.init: {:?}", e))?;

    let f = form.clone();
    dom::listen::<web::Event>(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = f.clone();
        spawn_local(async move {
            let result = match emailjs_send_form(config.service_id, config.template_id, &form) {
                Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    log::info!("[contact] message sent");
                    dom::alert(&outcome_message(Ok(())));
                    form.reset();
                }
                Err(e) => {
                    let detail = error_detail(&e);
                    log::warn!("[contact] send failed: {}", detail);
                    dom::alert(&outcome_message(Err(&detail)));
                }
            }
        });
    });
    Ok(())
}
