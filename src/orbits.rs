use crate::core::orbit::{Orbit, OrbitLayout, OrbitParams};
use crate::dom;
use anyhow::anyhow;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Give every `.random-orbit` element its own randomized orbit.
pub fn init<R: Rng + ?Sized>(document: &web::Document, rng: &mut R) -> anyhow::Result<()> {
    let planets: Vec<web::HtmlElement> = dom::query_all(document, ".random-orbit")?;
    if planets.is_empty() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| anyhow!("missing <head>"))?;
    let layout = OrbitLayout::default();

    for (i, planet) in planets.iter().enumerate() {
        let params = OrbitParams::sample(i, &layout, rng);
        install(document, &head, planet, &params)?;
        log::debug!(
            "[orbit] #{} angle={:.1} radius={} period={:.1}s {}",
            i,
            params.start_angle_deg,
            params.radius_px,
            params.period_sec,
            params.direction.as_css()
        );
        wire_hover(planet, Rc::new(RefCell::new(Orbit::new(params))));
    }
    log::info!("[orbit] animated {} elements", planets.len());
    Ok(())
}

fn install(
    document: &web::Document,
    head: &web::HtmlHeadElement,
    planet: &web::HtmlElement,
    params: &OrbitParams,
) -> anyhow::Result<()> {
    dom::set_style(planet, "transform", &params.static_transform());

    let sheet: web::HtmlStyleElement = document
        .create_element("style")
        .map_err(|e| anyhow!("create <style>: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow!("{:?}", e))?;
    sheet.set_text_content(Some(&params.keyframes()));
    head.append_child(&sheet)
        .map_err(|e| anyhow!("append <style>: {:?}", e))?;

    dom::set_style(planet, "animation", &params.animation());
    dom::set_style(planet, "animation-delay", "0s");
    Ok(())
}

fn wire_hover(planet: &web::HtmlElement, orbit: Rc<RefCell<Orbit>>) {
    let (el, o) = (planet.clone(), orbit.clone());
    dom::listen::<web::MouseEvent>(planet, "mouseenter", move |_| {
        let state = o.borrow_mut().hover_enter();
        dom::set_style(&el, "animation-play-state", state.as_css());
    });
    let el = planet.clone();
    dom::listen::<web::MouseEvent>(planet, "mouseleave", move |_| {
        let state = orbit.borrow_mut().hover_leave();
        dom::set_style(&el, "animation-play-state", state.as_css());
    });
}
