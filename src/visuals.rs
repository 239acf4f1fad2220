//! Appearance of the two backdrops, separate from the behavioral rules.
//!
//! Each variant renders the same three layers — gradient background,
//! optional line grid, particle discs — and differs only in the color
//! constants collected here.

use glam::Vec3;

use crate::rules::Variant;

/// Top gradient stop for the grid backdrop (#050a10).
pub const GRID_GRADIENT_TOP: Vec3 = Vec3::new(0.020, 0.039, 0.063);

/// Bottom gradient stop for the grid backdrop (#070d14).
pub const GRID_GRADIENT_BOTTOM: Vec3 = Vec3::new(0.027, 0.051, 0.078);

/// Grid particle hue: a bright blue, alpha supplied per particle.
pub const GRID_PARTICLE_COLOR: Vec3 = Vec3::new(0.471, 0.627, 1.0);

/// Grid line hue, kept faint by [`GRID_LINE_OPACITY`].
pub const GRID_LINE_COLOR: Vec3 = Vec3::new(0.196, 0.314, 0.471);

/// Alpha of the grid lines over the gradient.
pub const GRID_LINE_OPACITY: f32 = 0.1;

/// Distance between neighboring grid lines, in pixels.
pub const GRID_LINE_SPACING: f32 = 40.0;

/// Top gradient stop for the starfield backdrop.
pub const STAR_GRADIENT_TOP: Vec3 = Vec3::new(0.020, 0.020, 0.063);

/// Bottom gradient stop for the starfield backdrop.
pub const STAR_GRADIENT_BOTTOM: Vec3 = Vec3::new(0.039, 0.027, 0.094);

/// Star hue: a pale violet, alpha supplied per particle.
pub const STAR_PARTICLE_COLOR: Vec3 = Vec3::new(0.784, 0.706, 1.0);

/// Line-grid overlay settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLines {
    pub spacing: f32,
    pub color: Vec3,
    pub opacity: f32,
}

/// Everything the draw step needs to paint one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Gradient color at the top edge of the surface.
    pub gradient_top: Vec3,
    /// Gradient color at the bottom edge of the surface.
    pub gradient_bottom: Vec3,
    /// Fill color of every particle disc.
    pub particle_color: Vec3,
    /// Line grid beneath the particles, if the variant has one.
    pub grid: Option<GridLines>,
}

impl Theme {
    /// The fixed theme for a variant.
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Grid => Self {
                gradient_top: GRID_GRADIENT_TOP,
                gradient_bottom: GRID_GRADIENT_BOTTOM,
                particle_color: GRID_PARTICLE_COLOR,
                grid: Some(GridLines {
                    spacing: GRID_LINE_SPACING,
                    color: GRID_LINE_COLOR,
                    opacity: GRID_LINE_OPACITY,
                }),
            },
            Variant::Starfield => Self {
                gradient_top: STAR_GRADIENT_TOP,
                gradient_bottom: STAR_GRADIENT_BOTTOM,
                particle_color: STAR_PARTICLE_COLOR,
                grid: None,
            },
        }
    }
}
