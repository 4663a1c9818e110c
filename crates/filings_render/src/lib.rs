//! 2D Rendering Library
//!
//! This crate provides the wgpu-based drawing of the filings simulation.
//! It only ever reads the simulation through a
//! [`Snapshot`](filings_core::Snapshot).
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`pipeline::ShapePipeline`] - Flat-colored 2D line or triangle pipeline
//! - [`pipeline::FramePipeline`] - Filings and magnets drawn in one pass
//! - [`frame::FrameGeometry`] - Converts a snapshot into vertex lists

pub mod context;
pub mod error;
pub mod frame;
pub mod pipeline;

pub use error::GpuError;
pub use frame::{FrameGeometry, Palette};

// Re-export core types for convenience
pub use filings_core::{DipoleSource, Filing, Snapshot};
