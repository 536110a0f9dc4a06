//! Scene generation
//!
//! Segments are scattered uniformly over the canvas from a seeded RNG, so
//! a seed reproduces the same scene on every run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::geom::Segment;

/// RNG for a scene seed
pub fn scene_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Scatter `count` segments with every endpoint inside `[0, width) x [0, height)`
pub fn generate_segments<R: Rng>(rng: &mut R, count: usize, width: f32, height: f32) -> Vec<Segment> {
    let segments: Vec<Segment> = (0..count)
        .map(|_| {
            let start_x = rng.random::<f32>() * width;
            let start_y = rng.random::<f32>() * height;
            let end_x = rng.random::<f32>() * width;
            let end_y = rng.random::<f32>() * height;
            Segment::new(start_x, start_y, end_x, end_y)
        })
        .collect();

    log::info!("Generated {} segments over {}x{}", segments.len(), width, height);
    segments
}
