//! GPU-compatible data types for the 2D pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in simulation coordinates with color
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in simulation units (origin top-left, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// View uniforms
/// Layout: 16 bytes total (must match shapes.wgsl ViewUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ViewUniforms {
    /// Simulation area mapped onto the full surface
    pub world_size: [f32; 2],
    pub _padding: [f32; 2],
}

impl ViewUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            world_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for ViewUniforms {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}
