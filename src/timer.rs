use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Step = Rc<RefCell<dyn FnMut() -> Option<u32>>>;

/// Run `step` now and keep re-running it after whatever delay (ms) it returns.
/// Returning `None` stops the chain. Each run schedules its successor only
/// after it has finished, so runs never overlap.
pub fn drive(step: impl FnMut() -> Option<u32> + 'static) {
    let step: Step = Rc::new(RefCell::new(step));
    run(step);
}

fn run(step: Step) {
    let delay = (&mut *step.borrow_mut())();
    if let Some(delay_ms) = delay {
        schedule(step, delay_ms);
    }
}

fn schedule(step: Step, delay_ms: u32) {
    let Some(window) = web::window() else {
        log::error!("[timer] no window; timer chain dropped");
        return;
    };
    let callback = Closure::once_into_js(move || run(step));
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    ) {
        log::error!("[timer] setTimeout failed: {:?}", e);
    }
}
