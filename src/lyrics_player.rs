use crate::core::content::LYRICS;
use crate::core::lyrics::{LyricPlayer, RevealStep};
use crate::dom;
use crate::timer;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Background song with lyrics typed out in time with playback.
pub fn init(document: &web::Document) -> anyhow::Result<()> {
    let audio: web::HtmlAudioElement = dom::require_id(document, "bg-music")?;
    let lyric_text: web::Element = dom::require_id(document, "lyric-text")?;
    let play_btn: web::HtmlElement = dom::require_id(document, "play-btn")?;

    let player = Rc::new(RefCell::new(LyricPlayer::from_pairs(LYRICS)?));
    log::info!("[lyrics] {} lines loaded", LYRICS.len());

    let media = audio.clone();
    dom::listen::<web::Event>(&audio, "timeupdate", move |_| {
        let started = player.borrow_mut().on_time_update(media.current_time());
        if !started {
            return;
        }
        log::debug!("[lyrics] line {} at {:.2}s", player.borrow().cursor(), media.current_time());
        let (player, target) = (player.clone(), lyric_text.clone());
        timer::drive(move || {
            let mut player = player.borrow_mut();
            let step = player.reveal_tick();
            target.set_text_content(Some(player.displayed()));
            match step {
                RevealStep::Typed { delay_ms } => Some(delay_ms),
                RevealStep::Finished | RevealStep::Idle => None,
            }
        });
    });

    let (btn, media) = (play_btn.clone(), audio.clone());
    dom::add_click_listener(&play_btn, move || {
        dom::set_style(&btn, "display", "none");
        if let Err(e) = media.play() {
            log::warn!("[lyrics] play failed: {:?}", e);
        }
    });
    Ok(())
}
