//! Magnet controller for pointer and keyboard input
//!
//! Controls:
//! - Left mouse drag: move the movable magnet
//! - Left/Right arrows: rotate the movable magnet
//! - Up/Down arrows: strength slider
//! - `+`/`-`: filing count
//! - Any other key: one extra interaction pass

use filings_core::{Bounds, SimulationCommand, SourceId};
use filings_math::Vec2;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

use crate::controls::{CountInput, StrengthSlider};

/// Translates input events into simulation commands
pub struct MagnetController {
    // Pointer state
    pointer_pressed: bool,
    cursor: Option<Vec2>,

    // Surface (pixels) to simulation (units) mapping
    surface_size: (f64, f64),
    bounds: Bounds,

    // UI controls
    strength: StrengthSlider,
    count: CountInput,
    count_limit_reached: bool,

    pending: Vec<SimulationCommand>,

    // Configuration
    pub rotate_step_degrees: f64,
}

impl Default for MagnetController {
    fn default() -> Self {
        Self::new()
    }
}

impl MagnetController {
    pub fn new() -> Self {
        let bounds = Bounds::default();
        Self {
            pointer_pressed: false,
            cursor: None,

            surface_size: (bounds.width, bounds.height),
            bounds,

            strength: StrengthSlider::default(),
            count: CountInput::default(),
            count_limit_reached: false,

            pending: Vec::new(),

            rotate_step_degrees: 5.0,
        }
    }

    /// Process keyboard input
    ///
    /// Every key press produces at least one command. Returns true when the
    /// key is one of the magnet controls.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        if state != ElementState::Pressed {
            return false;
        }

        match key {
            KeyCode::ArrowLeft => {
                self.push_rotation(-self.rotate_step_degrees);
                true
            }
            KeyCode::ArrowRight => {
                self.push_rotation(self.rotate_step_degrees);
                true
            }
            KeyCode::ArrowUp => {
                let value = self.strength.nudge(1);
                self.pending.push(SimulationCommand::SetStrength(value as f64));
                true
            }
            KeyCode::ArrowDown => {
                let value = self.strength.nudge(-1);
                self.pending.push(SimulationCommand::SetStrength(value as f64));
                true
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                self.push_count_step(1);
                true
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                self.push_count_step(-1);
                true
            }
            _ => {
                self.pending.push(SimulationCommand::Relax);
                false
            }
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.pointer_pressed = state == ElementState::Pressed;
        }
    }

    /// Process cursor movement in surface pixels
    ///
    /// The magnet follows the cursor only while the left button is held.
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        let world = self.screen_to_world(x, y);
        self.cursor = Some(world);
        if self.pointer_pressed {
            self.pending.push(SimulationCommand::MoveSource {
                source: SourceId::Movable,
                x: world.x,
                y: world.y,
            });
        }
    }

    /// Cursor left the surface; stop dragging
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
        self.pointer_pressed = false;
    }

    /// Queue a command from outside the magnet controls
    ///
    /// It runs after every event already queued, in arrival order.
    pub fn push_command(&mut self, command: SimulationCommand) {
        self.pending.push(command);
    }

    /// Enter a raw filing count, as typed into a number field
    ///
    /// Entry point for a hosted count field; the app itself only nudges.
    pub fn set_filing_count(&mut self, requested: i64) {
        let change = self.count.set(requested);
        self.count_limit_reached = change.exceeded_max;
        self.pending.push(SimulationCommand::SetFilingCount(change.count));
    }

    /// Enter a raw strength, as dragged on the slider
    ///
    /// Entry point for a hosted slider; the app itself only nudges.
    pub fn set_strength(&mut self, requested: i32) {
        let value = self.strength.set(requested);
        self.pending.push(SimulationCommand::SetStrength(value as f64));
    }

    /// Update the surface size used to map cursor pixels to simulation units
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        self.surface_size = (width.max(1) as f64, height.max(1) as f64);
    }

    /// Convert surface pixels to simulation coordinates
    pub fn screen_to_world(&self, x: f64, y: f64) -> Vec2 {
        Vec2::new(
            x * self.bounds.width / self.surface_size.0,
            y * self.bounds.height / self.surface_size.1,
        )
    }

    /// Take all commands queued since the last call, oldest first
    pub fn drain_commands(&mut self) -> Vec<SimulationCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Whether the last count edit asked for more than the maximum
    pub fn count_limit_reached(&self) -> bool {
        self.count_limit_reached
    }

    pub fn is_dragging(&self) -> bool {
        self.pointer_pressed
    }

    /// Last cursor position in simulation coordinates
    pub fn cursor(&self) -> Option<Vec2> {
        self.cursor
    }

    pub fn strength(&self) -> i32 {
        self.strength.value()
    }

    pub fn filing_count(&self) -> usize {
        self.count.value()
    }

    fn push_rotation(&mut self, delta_degrees: f64) {
        self.pending.push(SimulationCommand::RotateSource {
            source: SourceId::Movable,
            delta_degrees,
        });
    }

    fn push_count_step(&mut self, steps: i64) {
        let change = self.count.nudge(steps);
        self.count_limit_reached = change.exceeded_max;
        if change.exceeded_max {
            log::warn!("Filing count limited to {}", change.count);
        }
        self.pending.push(SimulationCommand::SetFilingCount(change.count));
    }

    /// Builder: set the simulation bounds the cursor maps onto
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Builder: set the rotation per arrow key press
    pub fn with_rotate_step(mut self, degrees: f64) -> Self {
        self.rotate_step_degrees = degrees;
        self
    }

    /// Builder: replace the strength slider
    pub fn with_strength_slider(mut self, slider: StrengthSlider) -> Self {
        self.strength = slider;
        self
    }

    /// Builder: replace the count input
    pub fn with_count_input(mut self, input: CountInput) -> Self {
        self.count = input;
        self
    }
}
