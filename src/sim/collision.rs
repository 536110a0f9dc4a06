//! Collision detection and response for a circle against finite segments
//!
//! The tricky part is the finite length: a circle can sit squarely over a
//! segment's line yet miss the segment itself, or clip only an endpoint.

use crate::geom::{Circle, Point, Segment, angle_to, distance};
use crate::polar_to_cartesian;

/// Find where `segment` touches `circle`, if it does
///
/// Returns the point the circle should be pushed away from: the foot of the
/// perpendicular when it lies within the segment, otherwise whichever
/// endpoint (start first) the circle contains. Touching counts as a hit.
///
/// A zero-length segment behaves as a single point: the result is its
/// start exactly when the circle contains it.
pub fn segment_circle_intersection(segment: &Segment, circle: &Circle) -> Option<Point> {
    let center = circle.center;
    let forward = segment.project(center);
    let backward = segment.reverse().project(center);
    let length = segment.length();

    // Foot lies outside the segment from at least one end: only an endpoint can overlap
    if forward.length > length || backward.length > length {
        return if circle.contains(segment.start()) {
            Some(segment.start())
        } else if circle.contains(segment.end()) {
            Some(segment.end())
        } else {
            None
        };
    }

    // Split center - start into components along and across the line
    let offset = center - segment.start();
    let along = offset.dot(segment.direction());
    let across = (offset.length_squared() - along * along).max(0.0).sqrt();

    if across <= circle.radius() {
        Some(forward.point)
    } else {
        None
    }
}

/// Push `circle` away from `contact` until its boundary just touches it
///
/// Moves the center along the direction from the contact to the center by
/// `radius - distance`. Velocity is the caller's concern and is untouched.
/// If the center sits exactly on the contact the push falls back to +x.
pub fn resolve_contact(circle: &Circle, contact: Point) -> Circle {
    let depth = penetration(circle, contact);
    let push = polar_to_cartesian(depth, angle_to(contact, circle.center));
    circle.with_center(circle.center + push)
}

/// Overlap depth of `circle` past `contact` (negative when separated)
#[inline]
pub fn penetration(circle: &Circle, contact: Point) -> f32 {
    circle.radius() - distance(contact, circle.center)
}
