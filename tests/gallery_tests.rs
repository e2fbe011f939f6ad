// Host-side tests for gallery navigation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod content {
    include!("../src/core/content.rs");
}
mod error {
    include!("../src/core/error.rs");
}
mod gallery {
    include!("../src/core/gallery.rs");
}

use error::CoreError;
use gallery::*;

fn gallery() -> Gallery {
    Gallery::new(content::GALLERY_IMAGES, content::GALLERY_VIDEOS).unwrap()
}

#[test]
fn starts_on_first_image() {
    let g = gallery();
    assert_eq!(g.mode(), MediaKind::Image);
    assert_eq!(g.index(), 0);
    assert_eq!(
        g.current(),
        MediaItem {
            kind: MediaKind::Image,
            src: "img/gallery/1.jpg"
        }
    );
}

#[test]
fn prev_and_next_clamp_at_the_ends() {
    let mut g = gallery();
    g.prev();
    assert_eq!(g.index(), 0);
    for _ in 0..20 {
        g.next();
    }
    assert_eq!(g.index(), content::GALLERY_IMAGES.len() - 1);
    assert_eq!(g.current().src, "img/gallery/7.JPG");
    g.prev();
    assert_eq!(g.index(), content::GALLERY_IMAGES.len() - 2);
}

#[test]
fn mode_switch_resets_index() {
    let mut g = gallery();
    g.next();
    g.next();
    g.set_mode(MediaKind::Video);
    assert_eq!(g.index(), 0);
    assert_eq!(g.current().kind, MediaKind::Video);
    assert_eq!(g.current().src, "video/1.mp4");
    g.next();
    g.set_mode(MediaKind::Video);
    assert_eq!(g.index(), 0);
}

#[test]
fn swipe_threshold_is_exclusive() {
    let mut g = gallery();
    g.touch_start(200.0);
    g.touch_end(150.0);
    assert_eq!(g.index(), 0, "exactly 50px is not a swipe");

    g.touch_start(200.0);
    g.touch_end(149.0);
    assert_eq!(g.index(), 1, "51px leftward advances once");

    g.touch_start(100.0);
    g.touch_end(150.0);
    assert_eq!(g.index(), 1);

    g.touch_start(100.0);
    g.touch_end(151.0);
    assert_eq!(g.index(), 0, "51px rightward retreats");

    g.touch_start(100.0);
    g.touch_end(300.0);
    assert_eq!(g.index(), 0, "cannot retreat past the start");
}

#[test]
fn touch_end_without_start_is_ignored() {
    let mut g = gallery();
    g.touch_end(-500.0);
    assert_eq!(g.index(), 0);
    g.touch_start(300.0);
    g.touch_end(0.0);
    g.touch_end(-300.0);
    assert_eq!(g.index(), 1);
}

#[test]
fn index_stays_in_bounds_for_any_sequence() {
    let mut g = gallery();
    // deterministic pseudo-random op sequence
    let mut state: u32 = 0x1234_5678;
    for _ in 0..2000 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        match state % 5 {
            0 => g.prev(),
            1 => g.next(),
            2 => {
                g.touch_start(0.0);
                g.touch_end(f64::from(state % 200) - 100.0);
            }
            3 => {
                let mode = if state & 8 == 0 {
                    MediaKind::Image
                } else {
                    MediaKind::Video
                };
                g.set_mode(mode);
                assert_eq!(g.index(), 0);
            }
            _ => g.next(),
        }
        assert!(g.index() < g.len());
    }
}

#[test]
fn parses_mode_names() {
    assert_eq!("image".parse::<MediaKind>(), Ok(MediaKind::Image));
    assert_eq!("video".parse::<MediaKind>(), Ok(MediaKind::Video));
    assert_eq!(
        "audio".parse::<MediaKind>(),
        Err(CoreError::UnknownMode("audio".to_string()))
    );
}

#[test]
fn rejects_empty_lists() {
    let none: &[&str] = &[];
    assert_eq!(
        Gallery::new(none, content::GALLERY_VIDEOS).err(),
        Some(CoreError::EmptyMediaList("image"))
    );
    assert_eq!(
        Gallery::new(content::GALLERY_IMAGES, none).err(),
        Some(CoreError::EmptyMediaList("video"))
    );
}
