//! Circles: a center position with a fixed radius

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::point::{Point, distance};
use crate::error::GeometryError;

/// A located, sized body
///
/// The center moves every tick; the radius is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle")]
pub struct Circle {
    pub center: Point,
    radius: f32,
}

/// Unvalidated wire form; deserialization goes through [`Circle::at`]
#[derive(Deserialize)]
struct RawCircle {
    center: Point,
    radius: f32,
}

impl TryFrom<RawCircle> for Circle {
    type Error = GeometryError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::at(raw.center, raw.radius)
    }
}

impl Circle {
    /// Build a circle, rejecting negative or NaN radii
    pub fn new(x: f32, y: f32, radius: f32) -> Result<Self, GeometryError> {
        Self::at(Vec2::new(x, y), radius)
    }

    pub fn at(center: Point, radius: f32) -> Result<Self, GeometryError> {
        if radius.is_nan() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Boundary-inclusive containment test
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        distance(self.center, p) <= self.radius
    }

    /// Same circle moved to a new center
    #[inline]
    pub fn with_center(self, center: Point) -> Self {
        Self { center, ..self }
    }
}
