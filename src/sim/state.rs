//! Simulation state
//!
//! Everything a tick reads or writes lives in [`SimState`], so a run can be
//! driven from a test, a headless loop, or a render loop alike.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::scene::{generate_segments, scene_rng};
use crate::error::SettingsError;
use crate::geom::{Circle, Point, Segment};
use crate::settings::Settings;

/// What a debug line depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Circle center to a contact point, drawn before correction
    Contact,
    /// Segment endpoint to the circle center
    Spoke,
    /// Circle center along the velocity
    Heading,
}

/// A line for the debug overlay (not gameplay-affecting)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugLine {
    pub from: Point,
    pub to: Point,
    pub kind: LineKind,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Scene seed the segments were generated from
    pub seed: u64,
    /// The ball
    pub circle: Circle,
    /// Per-tick displacement of the ball
    pub velocity: Vec2,
    /// Speed applied when the ball is aimed
    pub speed: f32,
    /// Obstacles, in resolution order
    pub segments: Vec<Segment>,
    /// Whether the debug overlay is collected
    pub debug: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Total contacts resolved so far
    pub contacts_resolved: u64,
    /// Overlay from the latest tick: heading always, contacts and spokes in `debug`
    #[serde(skip)]
    pub overlay: Vec<DebugLine>,
}

impl SimState {
    /// Create a resting ball among the given segments
    pub fn new(circle: Circle, speed: f32, segments: Vec<Segment>) -> Self {
        Self {
            seed: 0,
            circle,
            velocity: Vec2::ZERO,
            speed,
            segments,
            debug: false,
            time_ticks: 0,
            contacts_resolved: 0,
            overlay: Vec::new(),
        }
    }

    /// Build the scene described by `settings`, validating them first
    pub fn from_settings(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let circle = Circle::at(settings.ball_start_point(), settings.ball_radius)?;
        let mut rng = scene_rng(settings.seed);
        let segments = generate_segments(
            &mut rng,
            settings.segment_count,
            settings.canvas_width,
            settings.canvas_height,
        );

        let mut state = Self::new(circle, settings.ball_speed, segments);
        state.seed = settings.seed;
        state.debug = settings.debug;
        Ok(state)
    }
}
