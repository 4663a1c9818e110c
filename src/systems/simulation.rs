//! Simulation system
//!
//! Owns the simulation state and feeds it the commands queued by the
//! magnet controller, one at a time and in arrival order.

use filings_core::{SimulationConfig, SimulationState, Snapshot};
use filings_input::MagnetController;

/// Result of a simulation update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationResult {
    /// Whether geometry needs to be rebuilt and re-uploaded
    pub geometry_dirty: bool,
    /// Whether the last count edit asked for more than the maximum
    pub count_limit_reached: bool,
    /// Number of commands applied this frame
    pub commands_applied: usize,
}

/// Drives the simulation state from queued input
pub struct SimulationSystem {
    state: SimulationState,
}

impl SimulationSystem {
    /// Create the system and its initial population
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            state: SimulationState::new(config),
        }
    }

    /// Apply every command queued by the controller since the last frame
    pub fn update(&mut self, controller: &mut MagnetController) -> SimulationResult {
        let commands = controller.drain_commands();
        let commands_applied = commands.len();
        for command in commands {
            self.state.apply(command);
        }

        SimulationResult {
            geometry_dirty: self.state.is_dirty(),
            count_limit_reached: controller.count_limit_reached(),
            commands_applied,
        }
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    /// Mark the current state as drawn
    pub fn mark_drawn(&mut self) {
        self.state.clear_dirty();
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }
}
