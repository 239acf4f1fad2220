//! # Backdrop - ambient animated particle backgrounds
//!
//! Two sibling full-window animations meant to sit behind other content:
//! a field of slow particles drifting over a faint line grid, and a
//! starfield streaking across a dark gradient.
//!
//! ## Quick Start
//!
//! ```no_run
//! use backdrop::prelude::*;
//!
//! fn main() {
//!     Backdrop::new(Variant::Grid).run().unwrap();
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Variants
//!
//! A [`Variant`] selects one of the two backdrops. Both share the same
//! machinery — field sizing from viewport area, randomized spawn, a
//! per-refresh tick of update-then-draw — and differ only in their motion
//! rule, boundary policy, and attribute ranges ([`rules`]).
//!
//! ### Fields and particles
//!
//! A [`Field`] is the particle collection for one mounted backdrop, sized as
//! `floor(viewport_area / density_divisor)`. It is rebuilt from scratch
//! whenever the viewport changes; resizing never interpolates old particles.
//! [`Particle`], [`Viewport`], and [`Field`] are plain values, so the whole
//! simulation can be driven and inspected in tests without a window.
//!
//! ### The render loop
//!
//! [`Backdrop::run`] opens a window and ticks once per displayed frame:
//! update every particle, then draw background, grid, and discs. The loop is
//! an explicit Idle/Running state machine ([`RenderLoop`]); closing the
//! window stops it before the next tick. A machine without a usable GPU gets
//! a blank window instead of an error — the animation is decoration and
//! never takes the host down.
//!
//! ## Tuning
//!
//! Every knob — density divisors, attribute ranges, grid spacing, respawn
//! margin, colors — is a named constant in [`rules`] and [`visuals`]. There
//! is deliberately no runtime configuration beyond the variant choice.

pub mod backdrop;
pub mod error;
pub mod field;
mod gpu;
pub mod rules;
mod shader;
pub mod spawn;
pub mod time;
pub mod visuals;

pub use backdrop::{Backdrop, LoopState, RenderLoop};
pub use error::{BackdropError, GpuError};
pub use field::{Field, Motion, Particle, Viewport};
pub use glam::Vec2;
pub use rules::{Boundary, Edge, Variant};
pub use spawn::SpawnContext;
pub use time::Time;
pub use visuals::Theme;

/// Convenient re-exports for common usage.
///
/// ```no_run
/// use backdrop::prelude::*;
/// # Backdrop::new(Variant::Starfield);
/// ```
pub mod prelude {
    pub use crate::backdrop::{Backdrop, LoopState, RenderLoop};
    pub use crate::field::{Field, Motion, Particle, Viewport};
    pub use crate::rules::{Boundary, Edge, Variant};
    pub use crate::spawn::SpawnContext;
    pub use crate::time::Time;
    pub use crate::visuals::Theme;
    pub use crate::Vec2;
}
