//! Particle field state: the simulated entities and the per-tick update.
//!
//! Everything here is a plain value type. The field, the viewport, and every
//! particle are passed around explicitly; nothing holds onto a window, a GPU
//! handle, or global state, which keeps the whole simulation testable without
//! a display.

use glam::Vec2;

use crate::rules::Variant;
use crate::spawn::SpawnContext;

/// Drawable-surface dimensions in pixels.
///
/// Owned by the lifecycle controller and replaced wholesale on resize; the
/// simulation only ever reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Surface area in square pixels.
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Number of particles this viewport sustains at the given density.
    ///
    /// `floor(area / divisor)`; a zero-area viewport sustains none.
    pub fn particle_count(self, density_divisor: f32) -> usize {
        (self.area() / density_divisor).floor() as usize
    }
}

/// How a particle moves, one tick at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Fixed per-axis velocity (grid variant).
    Drift(Vec2),
    /// Fixed speed along a heading angle (starfield variant).
    Heading { speed: f32, angle: f32 },
}

/// One simulated point: position, disc radius, alpha, and motion.
///
/// Size, opacity, and motion are fixed at spawn and only change if the
/// boundary policy respawns the particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub motion: Motion,
}

impl Particle {
    /// Displacement this particle covers in one tick.
    pub fn velocity(&self) -> Vec2 {
        match self.motion {
            Motion::Drift(v) => v,
            Motion::Heading { speed, angle } => Vec2::new(angle.cos(), angle.sin()) * speed,
        }
    }
}

/// The full particle collection for one mounted backdrop.
///
/// A field is created for a specific viewport and discarded wholesale when
/// the viewport changes; no particle survives a resize.
#[derive(Debug, Clone)]
pub struct Field {
    variant: Variant,
    particles: Vec<Particle>,
}

impl Field {
    /// Build a fresh field for `viewport`, sized by the variant's density
    /// divisor, every particle drawn independently from the variant's spawn
    /// ranges.
    pub fn init(variant: Variant, viewport: Viewport, ctx: &mut SpawnContext) -> Self {
        let count = viewport.particle_count(variant.density_divisor());
        let particles = (0..count).map(|_| variant.spawn(viewport, ctx)).collect();
        Self { variant, particles }
    }

    /// Advance every particle one tick: motion first, then the variant's
    /// boundary policy.
    pub fn step(&mut self, viewport: Viewport, ctx: &mut SpawnContext) {
        let boundary = self.variant.boundary();
        for particle in &mut self.particles {
            particle.position += particle.velocity();
            boundary.apply(particle, viewport, ctx);
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{
        GRID_DRIFT_RANGE, GRID_OPACITY_RANGE, GRID_SIZE_RANGE, STAR_SPAWN_OPACITY_RANGE,
        STAR_SPAWN_SIZE_RANGE, STAR_SPAWN_SPEED_RANGE,
    };

    #[test]
    fn particle_count_follows_the_density_formula() {
        let vp = Viewport::new(800.0, 600.0);
        assert_eq!(vp.particle_count(15_000.0), 32);
        assert_eq!(vp.particle_count(3_000.0), 160);

        let small = Viewport::new(400.0, 300.0);
        assert_eq!(small.particle_count(15_000.0), 8);
        assert_eq!(small.particle_count(3_000.0), 40);
    }

    #[test]
    fn zero_area_viewport_sustains_no_particles() {
        let mut ctx = SpawnContext::from_seed(0);
        for vp in [
            Viewport::new(0.0, 600.0),
            Viewport::new(800.0, 0.0),
            Viewport::new(0.0, 0.0),
        ] {
            assert!(Field::init(Variant::Grid, vp, &mut ctx).is_empty());
            assert!(Field::init(Variant::Starfield, vp, &mut ctx).is_empty());
        }
    }

    #[test]
    fn grid_spawn_attributes_come_from_the_grid_ranges() {
        let mut ctx = SpawnContext::from_seed(1);
        let vp = Viewport::new(800.0, 600.0);
        let field = Field::init(Variant::Grid, vp, &mut ctx);

        assert_eq!(field.len(), 32);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < vp.width);
            assert!(p.position.y >= 0.0 && p.position.y < vp.height);
            assert!(GRID_SIZE_RANGE.contains(&p.size));
            assert!(GRID_OPACITY_RANGE.contains(&p.opacity));
            match p.motion {
                Motion::Drift(v) => {
                    assert!(GRID_DRIFT_RANGE.contains(&v.x));
                    assert!(GRID_DRIFT_RANGE.contains(&v.y));
                }
                Motion::Heading { .. } => panic!("grid particles drift"),
            }
        }
    }

    #[test]
    fn star_spawn_attributes_come_from_the_spawn_ranges() {
        let mut ctx = SpawnContext::from_seed(2);
        let vp = Viewport::new(800.0, 600.0);
        let field = Field::init(Variant::Starfield, vp, &mut ctx);

        assert_eq!(field.len(), 160);
        for p in field.particles() {
            assert!(STAR_SPAWN_SIZE_RANGE.contains(&p.size));
            assert!(STAR_SPAWN_OPACITY_RANGE.contains(&p.opacity));
            match p.motion {
                Motion::Heading { speed, angle } => {
                    assert!(STAR_SPAWN_SPEED_RANGE.contains(&speed));
                    assert!((0.0..std::f32::consts::TAU).contains(&angle));
                }
                Motion::Drift(_) => panic!("stars move on headings"),
            }
        }
    }

    #[test]
    fn heading_velocity_is_polar() {
        let p = Particle {
            position: Vec2::ZERO,
            size: 1.0,
            opacity: 0.5,
            motion: Motion::Heading {
                speed: 2.0,
                angle: std::f32::consts::FRAC_PI_2,
            },
        };
        let v = p.velocity();
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 2.0).abs() < 1e-6);
    }

    #[test]
    fn step_keeps_grid_particles_inside_the_viewport() {
        let mut ctx = SpawnContext::from_seed(3);
        let vp = Viewport::new(800.0, 600.0);
        let mut field = Field::init(Variant::Grid, vp, &mut ctx);

        for _ in 0..500 {
            field.step(vp, &mut ctx);
            for p in field.particles() {
                assert!(p.position.x >= 0.0 && p.position.x < vp.width);
                assert!(p.position.y >= 0.0 && p.position.y < vp.height);
            }
        }
    }

    #[test]
    fn step_keeps_stars_within_the_respawn_margin() {
        let mut ctx = SpawnContext::from_seed(4);
        let vp = Viewport::new(200.0, 150.0);
        let mut field = Field::init(Variant::Starfield, vp, &mut ctx);

        for _ in 0..2000 {
            field.step(vp, &mut ctx);
            for p in field.particles() {
                assert!(p.position.x >= -10.0 && p.position.x <= vp.width + 10.0);
                assert!(p.position.y >= -10.0 && p.position.y <= vp.height + 10.0);
            }
        }
    }
}
