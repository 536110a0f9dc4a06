//! Deflect - a ball bouncing around a field of line segments
//!
//! Core modules:
//! - `geom`: Point primitives, circles and finite segments
//! - `sim`: Deterministic simulation (collision, resolution, scene, tick)
//! - `settings`: Data-driven scene configuration
//! - `error`: Construction and configuration errors

pub mod error;
pub mod geom;
pub mod settings;
pub mod sim;

pub use error::{GeometryError, SettingsError};
pub use geom::{Circle, Point, Projection, Segment};
pub use settings::Settings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Ball radius used by the default scene
    pub const BALL_RADIUS: f32 = 20.0;
    /// Ball speed in pixels per tick
    pub const BALL_SPEED: f32 = 2.0;
    /// Number of segments scattered over the canvas
    pub const SEGMENT_COUNT: usize = 15;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Fraction of the radius the debug heading line extends per unit of velocity
    pub const HEADING_SCALE: f32 = 0.5;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
