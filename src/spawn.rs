//! Random attribute source for particle spawning.
//!
//! Wraps the RNG behind a small set of domain helpers so spawn and respawn
//! code reads as intent (`ctx.sample(GRID_SIZE_RANGE)`,
//! `ctx.random_edge()`) instead of raw RNG plumbing.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::field::Viewport;
use crate::rules::Edge;

/// Uniform random source for particle attributes.
///
/// Production code uses [`SpawnContext::new`], which seeds from the clock.
/// Tests and benchmarks use [`SpawnContext::from_seed`] for repeatable
/// sequences.
pub struct SpawnContext {
    rng: SmallRng,
}

impl SpawnContext {
    /// Create a context seeded from the system clock.
    pub fn new() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42);
        Self::from_seed(seed)
    }

    /// Create a context with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Random f32 between 0.0 and 1.0.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 drawn uniformly from `range`.
    #[inline]
    pub fn sample(&mut self, range: Range<f32>) -> f32 {
        self.rng.gen_range(range)
    }

    /// Random angle in `[0, 2*pi)`.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Random point uniformly distributed over the viewport.
    ///
    /// The viewport must have positive area.
    pub fn random_in_viewport(&mut self, viewport: Viewport) -> Vec2 {
        Vec2::new(
            self.rng.gen_range(0.0..viewport.width),
            self.rng.gen_range(0.0..viewport.height),
        )
    }

    /// One of the four viewport edges, uniformly chosen.
    pub fn random_edge(&mut self) -> Edge {
        match self.rng.gen_range(0..4u32) {
            0 => Edge::Top,
            1 => Edge::Right,
            2 => Edge::Bottom,
            _ => Edge::Left,
        }
    }
}

impl Default for SpawnContext {
    fn default() -> Self {
        Self::new()
    }
}
