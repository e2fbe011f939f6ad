// Host-side tests for orbit parameter sampling.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use orbit::*;
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn sampled_parameters_stay_in_range() {
    let layout = OrbitLayout::default();
    let mut rng = StdRng::seed_from_u64(42);
    for i in 0..500 {
        let p = OrbitParams::sample(i % 8, &layout, &mut rng);
        assert!((0.0..360.0).contains(&p.start_angle_deg), "angle {}", p.start_angle_deg);
        assert!((15.0..30.0).contains(&p.period_sec), "period {}", p.period_sec);
        assert_eq!(p.radius_px, 120.0 + 40.0 * (i % 8) as f64);
    }
}

#[test]
fn both_directions_occur() {
    let layout = OrbitLayout::default();
    let mut rng = StdRng::seed_from_u64(7);
    let dirs: Vec<OrbitDirection> = (0..64)
        .map(|i| OrbitParams::sample(i, &layout, &mut rng).direction)
        .collect();
    assert!(dirs.contains(&OrbitDirection::Normal));
    assert!(dirs.contains(&OrbitDirection::Reverse));
}

#[test]
fn injected_rng_is_deterministic() {
    let layout = OrbitLayout::default();
    let a = OrbitParams::sample(2, &layout, &mut StepRng::new(0, 0));
    let b = OrbitParams::sample(2, &layout, &mut StepRng::new(0, 0));
    assert_eq!(a, b);
    assert_eq!(a.start_angle_deg, 0.0);
    assert_eq!(a.period_sec, 15.0);
    assert_eq!(a.radius_px, 200.0);
}

#[test]
fn period_excludes_upper_bound_for_largest_sample() {
    let layout = OrbitLayout::default();
    let mut rng = StepRng::new(u64::MAX, 0);
    let p = OrbitParams::sample(0, &layout, &mut rng);
    assert!(p.period_sec < 30.0, "period {}", p.period_sec);
    assert!(p.period_sec >= 15.0);
    assert!(p.start_angle_deg < 360.0);
}

#[test]
fn css_strings_describe_the_orbit() {
    let p = OrbitParams {
        ordinal: 3,
        start_angle_deg: 45.0,
        radius_px: 240.0,
        period_sec: 20.5,
        direction: OrbitDirection::Reverse,
    };
    assert_eq!(p.animation_name(), "orbit3");
    assert_eq!(
        p.static_transform(),
        "rotate(45.000deg) translateX(240px) rotate(-45.000deg)"
    );
    assert_eq!(p.animation(), "orbit3 20.500s linear infinite reverse");
    let kf = p.keyframes();
    assert!(kf.starts_with("@keyframes orbit3 {"));
    assert!(kf.contains("from { transform: rotate(45.000deg) translateX(240px) rotate(-45.000deg); }"));
    assert!(kf.contains("to { transform: rotate(405.000deg) translateX(240px) rotate(-405.000deg); }"));
}

#[test]
fn hover_pauses_and_resumes() {
    let params = OrbitParams::sample(0, &OrbitLayout::default(), &mut StdRng::seed_from_u64(1));
    let mut orbit = Orbit::new(params);
    assert_eq!(orbit.play_state(), PlayState::Running);
    assert_eq!(orbit.hover_enter().as_css(), "paused");
    assert_eq!(orbit.hover_enter(), PlayState::Paused);
    assert_eq!(orbit.hover_leave().as_css(), "running");
    assert_eq!(orbit.params(), &params);
}
