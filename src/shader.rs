use bytemuck::{Pod, Zeroable};

pub const BACKDROP_SOURCE: &str = include_str!("shaders/backdrop.wgsl");
pub const PARTICLE_SOURCE: &str = include_str!("shaders/particle.wgsl");

/// Uniform block shared by both pipelines. Layout matches the `Uniforms`
/// struct in the WGSL sources.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct Uniforms {
    pub viewport: [f32; 2],
    pub grid_spacing: f32,
    pub grid_enabled: f32,
    pub gradient_top: [f32; 4],
    pub gradient_bottom: [f32; 4],
    pub grid_color: [f32; 4],
    pub particle_color: [f32; 4],
}

/// Per-instance vertex data for the particle pipeline.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    pub size: f32,
    pub opacity: f32,
}
