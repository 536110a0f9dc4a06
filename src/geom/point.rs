//! Point and free-vector primitives

use glam::Vec2;

use crate::error::GeometryError;

/// A location (or free vector) in the plane
pub type Point = Vec2;

/// Angle in radians of the vector from `a` to `b`, in [-π, π]
///
/// Coincident points have no direction; this returns the sentinel `0.0`
/// for them. Use [`checked_angle_to`] to detect that case.
#[inline]
pub fn angle_to(a: Point, b: Point) -> f32 {
    checked_angle_to(a, b).unwrap_or(0.0)
}

/// Like [`angle_to`] but reports coincident points as an error
pub fn checked_angle_to(a: Point, b: Point) -> Result<f32, GeometryError> {
    let d = b - a;
    if d == Vec2::ZERO {
        return Err(GeometryError::DegenerateInput);
    }
    Ok(d.y.atan2(d.x))
}

/// Signed angle at `origin` swept from `p0` to `p1`
///
/// Not normalized: the result lies in [-2π, 2π]. Pass it through
/// [`crate::normalize_angle`] when a canonical angle is needed.
#[inline]
pub fn angle_between(origin: Point, p0: Point, p1: Point) -> f32 {
    angle_to(origin, p1) - angle_to(origin, p0)
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Point, b: Point) -> f32 {
    (b - a).length()
}

/// Accumulate `delta` onto `a` in place
#[inline]
pub fn translate(a: &mut Point, delta: Vec2) {
    *a += delta;
}

/// Euclidean norm of a free vector
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}
