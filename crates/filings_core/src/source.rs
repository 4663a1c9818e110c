//! Dipole sources (bar magnets)
//!
//! A source is a point-like field origin for the relaxation step. Its pole
//! positions are derived from position and orientation and only matter for
//! drawing, but they are kept current on every mutation.

use filings_math::{angle::heading, Vec2};
use serde::{Serialize, Deserialize};

/// A bar magnet acting on the filings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DipoleSource {
    position: Vec2,
    /// Orientation in degrees, 0 = north pole pointing up. Unbounded.
    orientation_degrees: f64,
    half_length: f64,
    strength: f64,
    north_pole: Vec2,
    south_pole: Vec2,
}

impl DipoleSource {
    /// Create a source at `position`, pointing up
    pub fn new(position: Vec2, half_length: f64, strength: f64) -> Self {
        let mut source = Self {
            position,
            orientation_degrees: 0.0,
            half_length,
            strength,
            north_pole: position,
            south_pole: position,
        };
        source.update_poles();
        source
    }

    /// Builder: start at a given orientation
    pub fn with_orientation(mut self, degrees: f64) -> Self {
        self.orientation_degrees = degrees;
        self.update_poles();
        self
    }

    /// Move the source and recompute its poles
    pub fn set_position(&mut self, x: f64, y: f64) {
        self.position = Vec2::new(x, y);
        self.update_poles();
    }

    /// Add `delta_degrees` to the orientation and recompute poles
    ///
    /// No wraparound is applied.
    pub fn rotate(&mut self, delta_degrees: f64) {
        self.orientation_degrees += delta_degrees;
        self.update_poles();
    }

    /// Set the field strength. Any value is accepted.
    pub fn set_strength(&mut self, value: f64) {
        self.strength = value;
    }

    fn update_poles(&mut self) {
        let offset = heading(self.orientation_degrees) * self.half_length;
        self.north_pole = self.position + offset;
        self.south_pole = self.position - offset;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn orientation_degrees(&self) -> f64 {
        self.orientation_degrees
    }

    pub fn half_length(&self) -> f64 {
        self.half_length
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// End of the magnet the orientation points toward
    pub fn north_pole(&self) -> Vec2 {
        self.north_pole
    }

    pub fn south_pole(&self) -> Vec2 {
        self.south_pole
    }
}
