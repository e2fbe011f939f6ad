// Host-side tests for tuning constants and fixed page content.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod content {
    include!("../src/core/content.rs");
}

use constants::*;
use content::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_are_fractions() {
    assert!(SECTION_THRESHOLD > 0.0 && SECTION_THRESHOLD <= 1.0);
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    // reveals trigger earlier than navbar highlighting
    assert!(REVEAL_THRESHOLD < SECTION_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn typing_timings_are_ordered() {
    assert!(DELETE_CHAR_MS < TYPE_CHAR_MS);
    assert!(TYPE_CHAR_MS < PAUSE_AFTER_DELETE_MS);
    assert!(PAUSE_AFTER_DELETE_MS < PAUSE_AFTER_TYPE_MS);
}

#[test]
fn root_margins_have_four_lengths() {
    for margin in [SECTION_ROOT_MARGIN, REVEAL_ROOT_MARGIN] {
        let parts: Vec<&str> = margin.split_whitespace().collect();
        assert_eq!(parts.len(), 4, "{margin}");
        assert!(parts.iter().all(|p| p.ends_with("px")));
    }
}

#[test]
fn lyric_sheet_is_sorted_and_non_empty() {
    assert!(!LYRICS.is_empty());
    assert!(LYRICS.windows(2).all(|w| w[0].0 <= w[1].0));
    assert!(LYRICS.iter().all(|(_, text)| !text.is_empty()));
}

#[test]
fn content_lists_are_usable() {
    assert!(PHRASES.iter().all(|p| !p.is_empty()));
    assert!(!GALLERY_IMAGES.is_empty());
    assert!(!GALLERY_VIDEOS.is_empty());
    assert!(GALLERY_IMAGES.iter().all(|p| p.starts_with("img/gallery/")));
    assert!(GALLERY_VIDEOS.iter().all(|p| p.ends_with(".mp4")));
}
