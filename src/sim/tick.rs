//! Per-frame simulation tick
//!
//! The caller owns scheduling: call [`tick`] once per frame (or [`step`]
//! directly). No timing assumption is made here; velocity is a per-tick
//! displacement.

use glam::Vec2;

use super::collision::{penetration, resolve_contact, segment_circle_intersection};
use super::state::{DebugLine, LineKind, SimState};
use crate::consts::HEADING_SCALE;
use crate::geom::{Circle, Point, Segment, angle_to, translate};
use crate::polar_to_cartesian;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Point the ball should head toward (from a click/tap)
    pub aim: Option<Point>,
    /// Flip the debug overlay
    pub toggle_debug: bool,
}

/// Velocity of magnitude `speed` pointing from `from` toward `target`
///
/// Aiming at `from` itself heads along +x.
#[inline]
pub fn aim_velocity(from: Point, target: Point, speed: f32) -> Vec2 {
    polar_to_cartesian(speed, angle_to(from, target))
}

/// Advance `circle` one tick: move by `velocity`, then resolve each segment
///
/// Segments are resolved one after another in slice order, each against the
/// circle as left by the previous one. A later push can reintroduce overlap
/// with an earlier segment; it is picked up on the next tick.
pub fn step(circle: Circle, velocity: Vec2, segments: &[Segment]) -> Circle {
    advance(circle, velocity, segments, |_, _, _, _| {})
}

/// [`step`] with a visitor called once per segment with
/// `(segment, contact, circle before, circle after)`
fn advance<F>(mut circle: Circle, velocity: Vec2, segments: &[Segment], mut visit: F) -> Circle
where
    F: FnMut(&Segment, Option<Point>, &Circle, &Circle),
{
    translate(&mut circle.center, velocity);

    for segment in segments {
        let before = circle;
        let contact = segment_circle_intersection(segment, &circle);
        if let Some(point) = contact {
            log::debug!(
                "Contact at ({:.2}, {:.2}), depth {:.3}",
                point.x,
                point.y,
                penetration(&circle, point)
            );
            circle = resolve_contact(&circle, point);
        }
        visit(segment, contact, &before, &circle);
    }

    circle
}

/// Advance the simulation state by one tick
pub fn tick(state: &mut SimState, input: &TickInput) {
    if input.toggle_debug {
        state.debug = !state.debug;
        log::info!("Debug overlay {}", if state.debug { "on" } else { "off" });
    }

    if let Some(target) = input.aim {
        state.velocity = aim_velocity(state.circle.center, target, state.speed);
        log::debug!("Aimed at ({:.1}, {:.1})", target.x, target.y);
    }

    state.time_ticks += 1;
    state.overlay.clear();

    let debug = state.debug;
    let mut contacts = 0u64;
    let mut overlay = Vec::new();

    state.circle = advance(state.circle, state.velocity, &state.segments, |segment, contact, before, after| {
        if let Some(point) = contact {
            contacts += 1;
            if debug {
                overlay.push(DebugLine {
                    from: before.center,
                    to: point,
                    kind: LineKind::Contact,
                });
            }
        }
        if debug {
            for endpoint in [segment.start(), segment.end()] {
                overlay.push(DebugLine {
                    from: endpoint,
                    to: after.center,
                    kind: LineKind::Spoke,
                });
            }
        }
    });

    state.contacts_resolved += contacts;

    // Heading is drawn every frame; contacts and spokes only in debug
    let center = state.circle.center;
    overlay.push(DebugLine {
        from: center,
        to: center + state.velocity * state.circle.radius() * HEADING_SCALE,
        kind: LineKind::Heading,
    });
    state.overlay = overlay;

    log::trace!(
        "Tick {}: ball at ({:.2}, {:.2}), {} contacts",
        state.time_ticks,
        state.circle.center.x,
        state.circle.center.y,
        contacts
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::distance;
    use crate::settings::Settings;

    fn ball(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(x, y, r).unwrap()
    }

    #[test]
    fn test_step_without_segments_translates() {
        let moved = step(ball(1.0, 2.0, 5.0), Vec2::new(0.5, -1.0), &[]);
        assert_eq!(moved.center, Vec2::new(1.5, 1.0));
        assert_eq!(moved.radius(), 5.0);
    }

    #[test]
    fn test_step_pushes_out_of_segment() {
        let floor = [Segment::new(0.0, 0.0, 10.0, 0.0)];
        // Moves down onto the floor and overlaps by 2
        let moved = step(ball(5.0, 4.0, 5.0), Vec2::new(0.0, -1.0), &floor);
        assert!((moved.center - Vec2::new(5.0, 5.0)).length() < 1e-4);
        assert!((distance(moved.center, Vec2::new(5.0, 0.0)) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_leaves_clear_ball_alone() {
        let floor = [Segment::new(0.0, 0.0, 10.0, 0.0)];
        let moved = step(ball(5.0, 20.0, 5.0), Vec2::new(1.0, 0.0), &floor);
        assert_eq!(moved.center, Vec2::new(6.0, 20.0));
    }

    #[test]
    fn test_step_resolves_in_slice_order() {
        let floor = Segment::new(0.0, 0.0, 10.0, 0.0);
        let ceiling = Segment::new(0.0, 10.0, 10.0, 10.0);
        let start = ball(5.0, 5.0, 6.0);

        let a = step(start, Vec2::ZERO, &[floor, ceiling]);
        let b = step(start, Vec2::ZERO, &[ceiling, floor]);

        // The last segment resolved wins; the other is left overlapping
        assert!((a.center.y - 4.0).abs() < 1e-4);
        assert!((b.center.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_aim_velocity() {
        let v = aim_velocity(Vec2::ZERO, Vec2::new(3.0, 4.0), 2.0);
        assert!((v - Vec2::new(1.2, 1.6)).length() < 1e-5);
        assert_eq!(aim_velocity(Vec2::ONE, Vec2::ONE, 2.0), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_tick_aim_then_move() {
        let mut state = SimState::new(ball(0.0, 0.0, 1.0), 2.0, Vec::new());
        let input = TickInput {
            aim: Some(Vec2::new(3.0, 4.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!((state.circle.center - Vec2::new(1.2, 1.6)).length() < 1e-5);

        // Velocity persists without further input
        tick(&mut state, &TickInput::default());
        assert!((state.circle.center - Vec2::new(2.4, 3.2)).length() < 1e-5);
        assert_eq!(state.time_ticks, 2);
    }

    #[test]
    fn test_tick_collision_keeps_velocity() {
        let floor = vec![Segment::new(0.0, 0.0, 10.0, 0.0)];
        let mut state = SimState::new(ball(5.0, 4.0, 5.0), 1.0, floor);
        state.velocity = Vec2::new(0.0, -1.0);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.velocity, Vec2::new(0.0, -1.0));
        assert_eq!(state.contacts_resolved, 1);
    }

    #[test]
    fn test_debug_toggle_and_overlay() {
        let floor = vec![Segment::new(0.0, 0.0, 10.0, 0.0)];
        let mut state = SimState::new(ball(5.0, 20.0, 5.0), 1.0, floor);

        tick(&mut state, &TickInput::default());
        let kinds: Vec<LineKind> = state.overlay.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Heading]);

        let toggle = TickInput {
            toggle_debug: true,
            ..Default::default()
        };
        tick(&mut state, &toggle);
        assert!(state.debug);
        let kinds: Vec<LineKind> = state.overlay.iter().map(|l| l.kind).collect();
        // Ball is clear of the floor: spokes and heading only
        assert_eq!(kinds, vec![LineKind::Spoke, LineKind::Spoke, LineKind::Heading]);

        tick(&mut state, &toggle);
        assert!(!state.debug);
        let kinds: Vec<LineKind> = state.overlay.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![LineKind::Heading]);
    }

    #[test]
    fn test_heading_drawn_without_debug() {
        let mut state = SimState::new(ball(0.0, 0.0, 20.0), 2.0, Vec::new());
        let input = TickInput {
            aim: Some(Vec2::new(10.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(!state.debug);
        assert_eq!(state.overlay.len(), 1);
        let heading = state.overlay[0];
        assert_eq!(heading.kind, LineKind::Heading);
        assert_eq!(heading.from, state.circle.center);
        // velocity * radius * 0.5 = (2, 0) * 10
        assert!((heading.to - heading.from - Vec2::new(20.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_debug_overlay_records_contact() {
        let floor = vec![Segment::new(0.0, 0.0, 10.0, 0.0)];
        let mut state = SimState::new(ball(5.0, 3.0, 5.0), 1.0, floor);
        state.debug = true;
        tick(&mut state, &TickInput::default());

        let contact = state
            .overlay
            .iter()
            .find(|l| l.kind == LineKind::Contact)
            .expect("contact line");
        assert_eq!(contact.from, Vec2::new(5.0, 3.0));
        assert!((contact.to - Vec2::new(5.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn test_debug_does_not_change_physics() {
        let settings = Settings {
            seed: 31,
            ball_start: [400.0, 300.0],
            ..Default::default()
        };
        let mut plain = SimState::from_settings(&settings).unwrap();
        let mut debug = SimState::from_settings(&settings).unwrap();
        debug.debug = true;

        let aim = TickInput {
            aim: Some(Vec2::new(0.0, 0.0)),
            ..Default::default()
        };
        tick(&mut plain, &aim);
        tick(&mut debug, &aim);
        for _ in 0..300 {
            tick(&mut plain, &TickInput::default());
            tick(&mut debug, &TickInput::default());
        }
        assert_eq!(plain.circle, debug.circle);
        assert_eq!(plain.contacts_resolved, debug.contacts_resolved);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let settings = Settings {
            seed: 99999,
            ball_start: [100.0, 100.0],
            ..Default::default()
        };
        let mut state1 = SimState::from_settings(&settings).unwrap();
        let mut state2 = SimState::from_settings(&settings).unwrap();

        let inputs = [
            TickInput {
                aim: Some(Vec2::new(700.0, 500.0)),
                ..Default::default()
            },
            TickInput::default(),
            TickInput {
                aim: Some(Vec2::new(50.0, 550.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for input in &inputs {
            for _ in 0..100 {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.circle, state2.circle);
        assert_eq!(state1.velocity, state2.velocity);
    }
}
