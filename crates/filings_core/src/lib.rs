//! Core types for the iron filings simulation
//!
//! This crate provides the simulation model behind the visualization:
//!
//! - [`DipoleSource`] - A bar magnet with position, orientation, strength and poles
//! - [`Filing`] - A single iron filing segment with fixed position and evolving orientation
//! - [`FilingField`] - The filing population and the per-pass relaxation step
//! - [`SimulationState`] - The two sources, the filings and their configuration
//! - [`SimulationCommand`] - Discrete mutations issued by the input layer
//! - [`Snapshot`] - Read-only view handed to the renderer
//!
//! Everything here is synchronous and single-threaded: each operation fully
//! completes, including its interaction pass, before returning.

mod source;
mod field;
mod config;
mod state;

pub use source::DipoleSource;
pub use field::{
    source_contribution, Filing, FilingField, INFLUENCE_FACTOR, INFLUENCE_RADIUS, MIN_DISTANCE,
};
pub use config::{Bounds, SimulationConfig};
pub use state::{
    SimulationCommand, SimulationState, Snapshot, SourceId, MAX_FILING_COUNT,
};

// Re-export commonly used types from filings_math for convenience
pub use filings_math::{normalize_180, Vec2};
