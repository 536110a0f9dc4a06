//! Planar geometry
//!
//! Points are plain `glam::Vec2` values. Circles and segments own their
//! points by value; nothing here is shared or reference counted.

pub mod circle;
pub mod point;
pub mod segment;

pub use circle::Circle;
pub use point::{Point, angle_between, angle_to, checked_angle_to, distance, magnitude, translate};
pub use segment::{Projection, Segment};
