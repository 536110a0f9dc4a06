//! Finite directed line segments
//!
//! A segment is stored as its two endpoints only; raw coordinates are
//! read back from them so the two views can never disagree.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::point::{Point, angle_to, distance};
use crate::error::GeometryError;
use crate::polar_to_cartesian;

/// Foot of the perpendicular from a query point onto a segment's line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Unsigned distance from `start` to `point`
    pub length: f32,
    /// The foot itself, on the ray from `start` through `end`
    pub point: Point,
}

/// A straight segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Build from raw coordinates. Zero-length segments are allowed.
    pub fn new(start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Self {
        Self {
            start: Vec2::new(start_x, start_y),
            end: Vec2::new(end_x, end_y),
        }
    }

    /// Like [`Segment::new`] but rejects NaN and infinite coordinates
    pub fn try_new(start_x: f32, start_y: f32, end_x: f32, end_y: f32) -> Result<Self, GeometryError> {
        let seg = Self::new(start_x, start_y, end_x, end_y);
        if seg.start.is_finite() && seg.end.is_finite() {
            Ok(seg)
        } else {
            Err(GeometryError::NonFinite)
        }
    }

    pub fn from_points(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Raw coordinates as `[start_x, start_y, end_x, end_y]`
    pub fn coords(&self) -> [f32; 4] {
        [self.start.x, self.start.y, self.end.x, self.end.y]
    }

    #[inline]
    pub fn length(&self) -> f32 {
        distance(self.start, self.end)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Unit vector from `start` toward `end`
    ///
    /// A zero-length segment has no direction and reports `(1, 0)`, the
    /// direction of the sentinel angle returned by [`angle_to`].
    #[inline]
    pub fn direction(&self) -> Vec2 {
        polar_to_cartesian(1.0, angle_to(self.start, self.end))
    }

    /// Project `p` onto the ray from `start` through `end`
    ///
    /// The distance is unsigned, so a point behind `start` lands the same
    /// distance ahead of it. Project from both ends (see [`Segment::reverse`])
    /// to tell whether the foot falls inside the segment.
    pub fn project(&self, p: Point) -> Projection {
        let dir = self.direction();
        let length = (p - self.start).dot(dir).abs();
        Projection {
            length,
            point: self.start + dir * length,
        }
    }

    /// A new segment with the endpoints swapped
    #[inline]
    pub fn reverse(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }
}
