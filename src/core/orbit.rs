// Randomized circular motion for the decorative "planets".

use super::constants::{
    ORBIT_BASE_RADIUS_PX, ORBIT_MIN_PERIOD_SEC, ORBIT_PERIOD_SPAN_SEC, ORBIT_RADIUS_STEP_PX,
};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbitDirection {
    Normal,
    Reverse,
}

impl OrbitDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            OrbitDirection::Normal => "normal",
            OrbitDirection::Reverse => "reverse",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitLayout {
    pub base_radius_px: f64,
    pub radius_step_px: f64,
    pub min_period_sec: f64,
    pub period_span_sec: f64,
}

impl Default for OrbitLayout {
    fn default() -> Self {
        Self {
            base_radius_px: ORBIT_BASE_RADIUS_PX,
            radius_step_px: ORBIT_RADIUS_STEP_PX,
            min_period_sec: ORBIT_MIN_PERIOD_SEC,
            period_span_sec: ORBIT_PERIOD_SPAN_SEC,
        }
    }
}

/// Per-element motion, fixed once drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    pub ordinal: usize,
    pub start_angle_deg: f64,
    pub radius_px: f64,
    pub period_sec: f64,
    pub direction: OrbitDirection,
}

impl OrbitParams {
    pub fn sample<R: Rng + ?Sized>(ordinal: usize, layout: &OrbitLayout, rng: &mut R) -> Self {
        let start_angle_deg = rng.gen_range(0.0..360.0);
        let radius_px = layout.base_radius_px + ordinal as f64 * layout.radius_step_px;
        let period_sec = rng
            .gen_range(layout.min_period_sec..layout.min_period_sec + layout.period_span_sec);
        let direction = if rng.gen_bool(0.5) {
            OrbitDirection::Normal
        } else {
            OrbitDirection::Reverse
        };
        Self {
            ordinal,
            start_angle_deg,
            radius_px,
            period_sec,
            direction,
        }
    }

    pub fn animation_name(&self) -> String {
        format!("orbit{}", self.ordinal)
    }

    fn transform_at(&self, angle_deg: f64) -> String {
        format!(
            "rotate({:.3}deg) translateX({}px) rotate(-{:.3}deg)",
            angle_deg, self.radius_px, angle_deg
        )
    }

    /// Transform applied before the animation engine picks the element up.
    pub fn static_transform(&self) -> String {
        self.transform_at(self.start_angle_deg)
    }

    pub fn keyframes(&self) -> String {
        format!(
            "@keyframes {} {{ from {{ transform: {}; }} to {{ transform: {}; }} }}",
            self.animation_name(),
            self.transform_at(self.start_angle_deg),
            self.transform_at(self.start_angle_deg + 360.0)
        )
    }

    pub fn animation(&self) -> String {
        format!(
            "{} {:.3}s linear infinite {}",
            self.animation_name(),
            self.period_sec,
            self.direction.as_css()
        )
    }
}

/// Hover-controlled play state; pausing keeps the current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayState {
    Running,
    Paused,
}

impl PlayState {
    pub fn as_css(self) -> &'static str {
        match self {
            PlayState::Running => "running",
            PlayState::Paused => "paused",
        }
    }
}

pub struct Orbit {
    params: OrbitParams,
    play_state: PlayState,
}

impl Orbit {
    pub fn new(params: OrbitParams) -> Self {
        Self {
            params,
            play_state: PlayState::Running,
        }
    }

    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    pub fn play_state(&self) -> PlayState {
        self.play_state
    }

    pub fn hover_enter(&mut self) -> PlayState {
        self.play_state = PlayState::Paused;
        self.play_state
    }

    pub fn hover_leave(&mut self) -> PlayState {
        self.play_state = PlayState::Running;
        self.play_state
    }
}
