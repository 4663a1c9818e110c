//! Application systems
//!
//! Window, simulation and rendering, each driven from the event loop in main.rs.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{TitleInfo, WindowSystem};
