//! Rendering pipeline components
//!
//! Everything is drawn with one flat-colored shader in simulation
//! coordinates; the vertex stage maps them onto the surface.

pub mod types;
pub mod shape_pipeline;

// Re-export types
pub use types::{Vertex2D, ViewUniforms};

// Re-export pipelines
pub use shape_pipeline::{FramePipeline, ShapePipeline};
