//! Deterministic simulation module
//!
//! All ball behavior lives here. This module must be pure and deterministic:
//! - One tick per call, no clock reads
//! - Seeded RNG only
//! - Stable iteration order (segment order is resolution order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{penetration, resolve_contact, segment_circle_intersection};
pub use scene::{generate_segments, scene_rng};
pub use state::{DebugLine, LineKind, SimState};
pub use tick::{TickInput, aim_velocity, step, tick};
