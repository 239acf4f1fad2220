//! Per-variant behavior: motion rules, boundary policies, and the tunable
//! constants that define each backdrop's feel.
//!
//! A [`Variant`] bundles everything that differs between the two backdrops:
//! how dense the field is, how a particle is born, and what happens when one
//! leaves the viewport. The shared machinery in [`crate::field`] stays
//! identical for both.
//!
//! All the "feel" knobs live here as named constants rather than inline
//! literals, so retuning the effect is a one-line change.

use std::f32::consts::{FRAC_PI_2, PI};
use std::ops::Range;

use glam::Vec2;

use crate::field::{Motion, Particle, Viewport};
use crate::spawn::SpawnContext;

/// Viewport area per grid particle. 800x600 yields 32 particles.
pub const GRID_DENSITY_DIVISOR: f32 = 15_000.0;

/// Viewport area per star. 800x600 yields 160 stars.
pub const STAR_DENSITY_DIVISOR: f32 = 3_000.0;

/// Disc radius range for grid particles.
pub const GRID_SIZE_RANGE: Range<f32> = 0.5..2.0;

/// Per-axis drift velocity range for grid particles, in units per tick.
pub const GRID_DRIFT_RANGE: Range<f32> = -0.15..0.15;

/// Alpha range for grid particles.
pub const GRID_OPACITY_RANGE: Range<f32> = 0.1..0.6;

/// Disc radius range for stars at initial field spawn.
pub const STAR_SPAWN_SIZE_RANGE: Range<f32> = 0.5..2.5;

/// Speed range for stars at initial field spawn, in units per tick.
pub const STAR_SPAWN_SPEED_RANGE: Range<f32> = 0.1..0.6;

/// Alpha range for stars at initial field spawn.
pub const STAR_SPAWN_OPACITY_RANGE: Range<f32> = 0.2..0.9;

/// Disc radius range for stars relocated by the respawn policy.
///
/// The respawn ranges are narrower than the spawn ranges above: respawned
/// stars come back smaller, slower, and dimmer than first-generation ones.
/// Keep them separate from the `STAR_SPAWN_*` set.
pub const STAR_RESPAWN_SIZE_RANGE: Range<f32> = 0.5..2.0;

/// Speed range for respawned stars, in units per tick.
pub const STAR_RESPAWN_SPEED_RANGE: Range<f32> = 0.1..0.4;

/// Alpha range for respawned stars.
pub const STAR_RESPAWN_OPACITY_RANGE: Range<f32> = 0.1..0.6;

/// How far outside the viewport a star may travel before it is respawned,
/// and how far outside the chosen edge it is placed afterwards.
pub const STAR_EDGE_MARGIN: f32 = 10.0;

/// Which backdrop to simulate.
///
/// The two variants share the field/loop machinery and differ only in the
/// policies exposed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Slow particles drifting over a line grid, wrapping at the edges.
    Grid,
    /// Stars streaking across the viewport, respawning on a random edge
    /// once they leave it.
    Starfield,
}

impl Variant {
    /// Viewport area per particle for this variant.
    pub fn density_divisor(self) -> f32 {
        match self {
            Variant::Grid => GRID_DENSITY_DIVISOR,
            Variant::Starfield => STAR_DENSITY_DIVISOR,
        }
    }

    /// Boundary policy applied after every motion step.
    pub fn boundary(self) -> Boundary {
        match self {
            Variant::Grid => Boundary::Wrap,
            Variant::Starfield => Boundary::Respawn {
                margin: STAR_EDGE_MARGIN,
            },
        }
    }

    /// Short lowercase name, used for titles and benchmark labels.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Grid => "grid",
            Variant::Starfield => "starfield",
        }
    }

    /// Create one particle with freshly drawn attributes.
    pub(crate) fn spawn(self, viewport: Viewport, ctx: &mut SpawnContext) -> Particle {
        match self {
            Variant::Grid => Particle {
                position: ctx.random_in_viewport(viewport),
                size: ctx.sample(GRID_SIZE_RANGE),
                opacity: ctx.sample(GRID_OPACITY_RANGE),
                motion: Motion::Drift(Vec2::new(
                    ctx.sample(GRID_DRIFT_RANGE),
                    ctx.sample(GRID_DRIFT_RANGE),
                )),
            },
            Variant::Starfield => Particle {
                position: ctx.random_in_viewport(viewport),
                size: ctx.sample(STAR_SPAWN_SIZE_RANGE),
                opacity: ctx.sample(STAR_SPAWN_OPACITY_RANGE),
                motion: Motion::Heading {
                    speed: ctx.sample(STAR_SPAWN_SPEED_RANGE),
                    angle: ctx.random_angle(),
                },
            },
        }
    }
}

/// What happens when a particle's position leaves the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// Toroidal wrap: both coordinates are renormalized into
    /// `[0, bound)` every tick, regardless of how far the particle moved.
    Wrap,
    /// Relocate the particle to a random point on a random viewport edge
    /// once it travels more than `margin` units outside any edge, redrawing
    /// its attributes from the respawn ranges.
    Respawn {
        /// Distance beyond the viewport that triggers (and positions) the
        /// respawn.
        margin: f32,
    },
}

impl Boundary {
    /// Renormalize `particle` according to this policy.
    ///
    /// Callers run this after advancing the particle's position; it is the
    /// second half of the update step.
    pub fn apply(self, particle: &mut Particle, viewport: Viewport, ctx: &mut SpawnContext) {
        match self {
            Boundary::Wrap => {
                particle.position.x = particle.position.x.rem_euclid(viewport.width);
                particle.position.y = particle.position.y.rem_euclid(viewport.height);
            }
            Boundary::Respawn { margin } => {
                let p = particle.position;
                let outside = p.x < -margin
                    || p.x > viewport.width + margin
                    || p.y < -margin
                    || p.y > viewport.height + margin;
                if outside {
                    respawn_on_edge(particle, viewport, margin, ctx);
                }
            }
        }
    }
}

/// One of the four viewport edges a star can respawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Lower bound of the half-circle of headings drawn for stars respawned
    /// on this edge; the drawn angle is `base_angle() + [0, pi)`.
    pub fn base_angle(self) -> f32 {
        match self {
            Edge::Top => FRAC_PI_2,
            Edge::Right => PI,
            Edge::Bottom => -FRAC_PI_2,
            Edge::Left => 0.0,
        }
    }
}

/// Relocate a star onto a uniformly chosen edge, `margin` units outside it,
/// with a heading drawn from that edge's half-circle and attributes redrawn
/// from the `STAR_RESPAWN_*` ranges.
fn respawn_on_edge(star: &mut Particle, viewport: Viewport, margin: f32, ctx: &mut SpawnContext) {
    let edge = ctx.random_edge();

    star.position = match edge {
        Edge::Top => Vec2::new(ctx.sample(0.0..viewport.width), -margin),
        Edge::Right => Vec2::new(viewport.width + margin, ctx.sample(0.0..viewport.height)),
        Edge::Bottom => Vec2::new(ctx.sample(0.0..viewport.width), viewport.height + margin),
        Edge::Left => Vec2::new(-margin, ctx.sample(0.0..viewport.height)),
    };
    star.motion = Motion::Heading {
        speed: ctx.sample(STAR_RESPAWN_SPEED_RANGE),
        angle: edge.base_angle() + ctx.sample(0.0..PI),
    };
    star.size = ctx.sample(STAR_RESPAWN_SIZE_RANGE);
    star.opacity = ctx.sample(STAR_RESPAWN_OPACITY_RANGE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0)
    }

    fn grid_particle(x: f32, y: f32, drift: Vec2) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            size: 1.0,
            opacity: 0.3,
            motion: Motion::Drift(drift),
        }
    }

    #[test]
    fn wrap_crossing_right_edge_is_modular() {
        let mut ctx = SpawnContext::from_seed(1);
        let mut p = grid_particle(799.9, 300.0, Vec2::new(0.5, 0.0));

        p.position += p.velocity();
        Boundary::Wrap.apply(&mut p, viewport(), &mut ctx);

        assert!((p.position.x - 0.4).abs() < 1e-3);
        assert!((p.position.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn wrap_holds_for_large_velocities() {
        let mut ctx = SpawnContext::from_seed(2);
        let mut p = grid_particle(10.0, 10.0, Vec2::new(12_345.0, -9_876.5));

        p.position += p.velocity();
        Boundary::Wrap.apply(&mut p, viewport(), &mut ctx);

        assert!(p.position.x >= 0.0 && p.position.x < 800.0);
        assert!(p.position.y >= 0.0 && p.position.y < 600.0);
    }

    #[test]
    fn wrap_negative_coordinate_lands_below_bound() {
        let mut ctx = SpawnContext::from_seed(3);
        let mut p = grid_particle(0.05, 0.05, Vec2::new(-0.1, -0.1));

        p.position += p.velocity();
        Boundary::Wrap.apply(&mut p, viewport(), &mut ctx);

        assert!((p.position.x - 799.95).abs() < 1e-3);
        assert!((p.position.y - 599.95).abs() < 1e-3);
    }

    #[test]
    fn respawn_ignores_particles_within_margin() {
        let mut ctx = SpawnContext::from_seed(4);
        let mut p = Particle {
            position: Vec2::new(-9.5, 300.0),
            size: 2.2,
            opacity: 0.8,
            motion: Motion::Heading {
                speed: 0.5,
                angle: 1.0,
            },
        };
        let before = p;

        Variant::Starfield
            .boundary()
            .apply(&mut p, viewport(), &mut ctx);

        assert_eq!(p, before);
    }

    #[test]
    fn respawn_relocates_to_an_edge_with_narrowed_attributes() {
        let mut ctx = SpawnContext::from_seed(5);
        let vp = viewport();

        for _ in 0..200 {
            let mut p = Particle {
                position: Vec2::new(820.3, 300.0),
                size: 2.4,
                opacity: 0.85,
                motion: Motion::Heading {
                    speed: 0.55,
                    angle: 0.0,
                },
            };
            Variant::Starfield.boundary().apply(&mut p, vp, &mut ctx);

            let on_vertical_edge = p.position.x == -STAR_EDGE_MARGIN
                || p.position.x == vp.width + STAR_EDGE_MARGIN;
            let on_horizontal_edge = p.position.y == -STAR_EDGE_MARGIN
                || p.position.y == vp.height + STAR_EDGE_MARGIN;
            assert!(on_vertical_edge || on_horizontal_edge);

            assert!(STAR_RESPAWN_SIZE_RANGE.contains(&p.size));
            assert!(STAR_RESPAWN_OPACITY_RANGE.contains(&p.opacity));
            match p.motion {
                Motion::Heading { speed, angle } => {
                    assert!(STAR_RESPAWN_SPEED_RANGE.contains(&speed));

                    // The heading must come from the chosen edge's half-circle.
                    if p.position.y == -STAR_EDGE_MARGIN {
                        assert!((FRAC_PI_2..FRAC_PI_2 + PI).contains(&angle));
                    } else if p.position.y == vp.height + STAR_EDGE_MARGIN {
                        assert!((-FRAC_PI_2..FRAC_PI_2).contains(&angle));
                    } else if p.position.x == vp.width + STAR_EDGE_MARGIN {
                        assert!((PI..2.0 * PI).contains(&angle));
                    } else {
                        assert!((0.0..PI).contains(&angle));
                    }
                }
                Motion::Drift(_) => panic!("respawn must keep polar motion"),
            }
        }
    }

    #[test]
    fn respawn_reaches_all_four_edges() {
        let mut ctx = SpawnContext::from_seed(6);
        let vp = viewport();
        let mut seen = [false; 4];

        for _ in 0..400 {
            let mut p = Particle {
                position: Vec2::new(-50.0, -50.0),
                size: 1.0,
                opacity: 0.5,
                motion: Motion::Heading {
                    speed: 0.2,
                    angle: 0.0,
                },
            };
            Variant::Starfield.boundary().apply(&mut p, vp, &mut ctx);

            if p.position.y == -STAR_EDGE_MARGIN {
                seen[0] = true;
            } else if p.position.x == vp.width + STAR_EDGE_MARGIN {
                seen[1] = true;
            } else if p.position.y == vp.height + STAR_EDGE_MARGIN {
                seen[2] = true;
            } else if p.position.x == -STAR_EDGE_MARGIN {
                seen[3] = true;
            }
        }

        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn variant_policies_line_up() {
        assert_eq!(Variant::Grid.boundary(), Boundary::Wrap);
        assert_eq!(
            Variant::Starfield.boundary(),
            Boundary::Respawn {
                margin: STAR_EDGE_MARGIN
            }
        );
        assert_eq!(Variant::Grid.density_divisor(), 15_000.0);
        assert_eq!(Variant::Starfield.density_divisor(), 3_000.0);
    }
}
