use crate::core::content::PHRASES;
use crate::core::typing::{TypingEngine, TypingTimings};
use crate::dom;
use crate::timer;
use web_sys as web;

/// Hero-line typing animation; runs for the page lifetime.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let target: web::Element = dom::require_id(document, "typing-text")?;
    let mut engine = TypingEngine::new(PHRASES, TypingTimings::default())?;
    log::info!("[typing] cycling {} phrases", PHRASES.len());

    timer::drive(move || {
        let frame = engine.tick();
        target.set_text_content(Some(&frame.text));
        Some(frame.delay_ms)
    });
    Ok(())
}
