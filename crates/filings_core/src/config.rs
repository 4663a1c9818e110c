//! Simulation configuration

use filings_math::Vec2;
use serde::{Serialize, Deserialize};

/// Size of the area filings are scattered over, in simulation units
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a point lies in `[0, width) × [0, height)`
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

/// Configuration for the simulation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Area the filings are generated in
    pub bounds: Bounds,
    /// Initial filing population
    pub filing_count: usize,
    /// Full length of a filing segment
    pub filing_length: f64,
    /// Initial strength of both sources
    pub strength: f64,
    /// Half the length of a magnet body (center to pole)
    pub source_half_length: f64,
    /// Start position of the draggable magnet
    pub movable_position: Vec2,
    /// Position of the fixed magnet
    pub stationary_position: Vec2,
    /// RNG seed for filing generation (None = entropy)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            filing_count: 700,
            filing_length: 10.0,
            strength: 150.0,
            source_half_length: 50.0,
            movable_position: Vec2::new(170.0, 230.0),
            stationary_position: Vec2::new(230.0, 170.0),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Builder: fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builder: set the initial filing count
    pub fn with_filing_count(mut self, count: usize) -> Self {
        self.filing_count = count;
        self
    }

    /// Half of [`Self::filing_length`], used by every generated filing
    pub fn filing_half_length(&self) -> f64 {
        self.filing_length / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.bounds, Bounds::new(400.0, 400.0));
        assert_eq!(config.filing_count, 700);
        assert_eq!(config.strength, 150.0);
        assert_eq!(config.filing_half_length(), 5.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders() {
        let config = SimulationConfig::default().with_seed(9).with_filing_count(12);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.filing_count, 12);
    }

    #[test]
    fn test_bounds_contains() {
        let b = Bounds::new(10.0, 5.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(9.99, 4.99)));
        assert!(!b.contains(Vec2::new(10.0, 1.0)));
        assert!(!b.contains(Vec2::new(1.0, 5.0)));
        assert!(!b.contains(Vec2::new(-0.1, 1.0)));
    }
}
