use crate::core::tracker::ObserverOptions;
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Start an intersection observer over `targets`; `on_batch` receives every
/// visibility-change batch the browser delivers for the page lifetime.
pub fn observe(
    targets: &[web::Element],
    options: ObserverOptions,
    mut on_batch: impl FnMut(&[web::IntersectionObserverEntry], &web::IntersectionObserver) + 'static,
) -> anyhow::Result<web::IntersectionObserver> {
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let batch: Vec<web::IntersectionObserverEntry> = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .collect();
            on_batch(&batch, &observer);
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    let observer =
        web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
            .map_err(|e| anyhow!("IntersectionObserver error: {:?}", e))?;
    closure.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
