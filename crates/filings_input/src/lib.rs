//! Magnet input handling
//!
//! This crate turns raw winit pointer and keyboard events into
//! [`SimulationCommand`](filings_core::SimulationCommand)s. It also models
//! the two numeric controls of the UI, the strength slider and the filing
//! count input, including the advisory over-limit flag of the latter.

mod controls;
mod magnet_controller;

pub use controls::{CountChange, CountInput, StrengthSlider};
pub use magnet_controller::MagnetController;
