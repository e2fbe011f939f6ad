// Host-side tests for section tracking and scroll reveal bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod tracker {
    include!("../src/core/tracker.rs");
}

use tracker::*;

fn change(id: &str, intersecting: bool, ratio: f64) -> VisibilityChange<'_> {
    VisibilityChange {
        id,
        intersecting,
        ratio,
    }
}

fn tracker() -> SectionTracker {
    SectionTracker::new(["home", "about", "projects", "contact"], 0.3)
}

#[test]
fn observer_options_match_page_tuning() {
    let s = ObserverOptions::sections();
    assert_eq!(s.threshold, 0.3);
    assert_eq!(s.root_margin, "-100px 0px -100px 0px");
    let r = ObserverOptions::reveal();
    assert_eq!(r.threshold, 0.1);
    assert_eq!(r.root_margin, "0px 0px -50px 0px");
}

#[test]
fn visible_section_becomes_active() {
    let mut t = tracker();
    assert_eq!(t.active(), None);
    assert_eq!(t.apply(&[change("about", true, 0.5)]), Some("about"));
    assert_eq!(t.active(), Some("about"));
    assert!(t.is_visible("about"));
}

#[test]
fn last_visible_entry_in_batch_wins() {
    let mut t = tracker();
    let batch = [
        change("home", true, 0.9),
        change("about", false, 0.0),
        change("projects", true, 0.4),
    ];
    assert_eq!(t.apply(&batch), Some("projects"));
    assert_eq!(t.active(), Some("projects"));
    assert!(t.is_visible("home"));
}

#[test]
fn batch_without_visible_sections_keeps_highlight() {
    let mut t = tracker();
    t.apply(&[change("home", true, 1.0)]);
    assert_eq!(t.apply(&[change("home", false, 0.0)]), None);
    assert_eq!(t.active(), Some("home"));
    assert!(!t.is_visible("home"));
}

#[test]
fn below_threshold_is_not_visible() {
    let mut t = tracker();
    assert_eq!(t.apply(&[change("contact", true, 0.29)]), None);
    assert_eq!(t.apply(&[change("contact", true, 0.3)]), Some("contact"));
}

#[test]
fn unknown_sections_are_ignored() {
    let mut t = tracker();
    assert_eq!(t.apply(&[change("footer", true, 1.0)]), None);
    assert_eq!(t.active(), None);
}

#[test]
fn active_always_tracks_most_recent_visible_report() {
    let mut t = tracker();
    let script: &[(&str, bool, f64)] = &[
        ("home", true, 1.0),
        ("about", true, 0.35),
        ("home", false, 0.0),
        ("projects", false, 0.1),
        ("contact", true, 0.8),
        ("about", true, 0.6),
    ];
    let mut expected = None;
    for &(id, intersecting, ratio) in script {
        if intersecting && ratio >= 0.3 {
            expected = Some(id);
        }
        t.apply(&[change(id, intersecting, ratio)]);
        assert_eq!(t.active(), expected);
    }
}

#[test]
fn reveal_kind_from_classes() {
    assert_eq!(RevealKind::classify(|c| c == "slide-in-left"), RevealKind::Left);
    assert_eq!(RevealKind::classify(|c| c == "slide-in-right"), RevealKind::Right);
    assert_eq!(RevealKind::classify(|c| c == "slide-in-up"), RevealKind::Up);
    assert_eq!(RevealKind::classify(|_| true), RevealKind::Left);
    assert_eq!(RevealKind::Right.settled_transform(), "translateX(0)");
    assert_eq!(RevealKind::Up.settled_transform(), "translateY(0)");
}

#[test]
fn reveal_is_one_way() {
    let mut set = RevealSet::new();
    let left = set.register(RevealKind::Left);
    let up = set.register(RevealKind::Up);

    assert_eq!(set.on_visibility(left, false), None);
    assert!(!set.is_shown(left));

    let style = set.on_visibility(left, true).unwrap();
    assert_eq!(style.opacity, "1");
    assert_eq!(style.transform, "translateX(0)");
    assert!(set.is_shown(left));

    assert_eq!(set.on_visibility(left, true), None);
    assert_eq!(set.on_visibility(left, false), None);
    assert!(set.is_shown(left));

    assert_eq!(set.on_visibility(up, true).unwrap().transform, "translateY(0)");
    assert_eq!(set.on_visibility(99, true), None);
}
