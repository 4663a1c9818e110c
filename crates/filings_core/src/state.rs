//! Simulation state
//!
//! Owns the two sources and the filing population. Every mutating operation
//! finishes with an interaction pass, so callers never observe a source
//! change without the filings having reacted to it.

use filings_math::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{Bounds, SimulationConfig};
use crate::field::{Filing, FilingField};
use crate::source::DipoleSource;

/// Largest filing population the input layer will request
pub const MAX_FILING_COUNT: usize = 10_000;

/// Identifies one of the two sources
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceId {
    /// The magnet the user drags and rotates
    Movable,
    /// The fixed magnet
    Stationary,
}

impl SourceId {
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SourceId::Movable => 0,
            SourceId::Stationary => 1,
        }
    }
}

/// A discrete mutation requested by the input layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimulationCommand {
    /// Move a source to simulation coordinates
    MoveSource { source: SourceId, x: f64, y: f64 },
    /// Rotate a source by a delta in degrees
    RotateSource { source: SourceId, delta_degrees: f64 },
    /// Set the strength of both sources
    SetStrength(f64),
    /// Resize (and regenerate) the filing population
    SetFilingCount(usize),
    /// Regenerate the current population in place
    Regenerate,
    /// Put the movable source back at its start, upright
    ResetMovable,
    /// Run one interaction pass without changing anything else
    Relax,
}

/// Read-only view of the state for rendering
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    pub sources: &'a [DipoleSource; 2],
    pub filings: &'a [Filing],
    pub bounds: Bounds,
}

/// The complete simulation: two sources, the filings, and their settings
pub struct SimulationState {
    sources: [DipoleSource; 2],
    field: FilingField,
    filing_count: usize,
    config: SimulationConfig,
    rng: ChaCha8Rng,
    dirty: bool,
    passes: u64,
}

impl SimulationState {
    /// Create the initial state from a configuration
    ///
    /// Both sources start pointing up at their configured positions and the
    /// initial population is generated. No interaction pass runs yet.
    pub fn new(config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let sources = [
            DipoleSource::new(config.movable_position, config.source_half_length, config.strength),
            DipoleSource::new(config.stationary_position, config.source_half_length, config.strength),
        ];

        let mut state = Self {
            sources,
            field: FilingField::new(),
            filing_count: config.filing_count,
            config,
            rng,
            dirty: true,
            passes: 0,
        };
        state.regenerate();

        log::info!(
            "Simulation initialised: {} filings in {}x{}",
            state.filing_count,
            state.config.bounds.width,
            state.config.bounds.height
        );
        state
    }

    /// Resize the population to `count` filings and run an interaction pass
    ///
    /// The count is taken as given; bounding it by [`MAX_FILING_COUNT`] is
    /// left to the caller.
    pub fn set_filing_count(&mut self, count: usize) {
        self.filing_count = count;
        self.regenerate();
        self.interact();
    }

    /// Set the strength of both sources and run an interaction pass
    pub fn set_source_strength(&mut self, value: f64) {
        for source in &mut self.sources {
            source.set_strength(value);
        }
        self.interact();
    }

    /// Move a source and run an interaction pass
    pub fn move_source(&mut self, id: SourceId, x: f64, y: f64) {
        self.sources[id.index()].set_position(x, y);
        self.interact();
    }

    /// Rotate a source and run an interaction pass
    pub fn rotate_source(&mut self, id: SourceId, delta_degrees: f64) {
        self.sources[id.index()].rotate(delta_degrees);
        self.interact();
    }

    /// Run one interaction pass over the current filings
    pub fn interact(&mut self) {
        self.field.update(&self.sources);
        self.passes += 1;
        self.dirty = true;
    }

    /// Apply one command from the input layer
    pub fn apply(&mut self, command: SimulationCommand) {
        log::debug!("Applying {:?}", command);
        match command {
            SimulationCommand::MoveSource { source, x, y } => self.move_source(source, x, y),
            SimulationCommand::RotateSource { source, delta_degrees } => {
                self.rotate_source(source, delta_degrees)
            }
            SimulationCommand::SetStrength(value) => self.set_source_strength(value),
            SimulationCommand::SetFilingCount(count) => self.set_filing_count(count),
            SimulationCommand::Regenerate => {
                self.regenerate();
                self.interact();
            }
            SimulationCommand::ResetMovable => self.reset_movable(),
            SimulationCommand::Relax => self.interact(),
        }
    }

    /// Discard the population and scatter `filing_count` new filings
    fn regenerate(&mut self) {
        let half_length = self.config.filing_half_length();
        self.field
            .generate(self.filing_count, self.config.bounds, half_length, &mut self.rng);
        self.dirty = true;
        log::info!("Generated {} filings", self.field.len());
    }

    /// Read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            sources: &self.sources,
            filings: self.field.filings(),
            bounds: self.config.bounds,
        }
    }

    pub fn sources(&self) -> &[DipoleSource; 2] {
        &self.sources
    }

    pub fn source(&self, id: SourceId) -> &DipoleSource {
        &self.sources[id.index()]
    }

    pub fn filings(&self) -> &[Filing] {
        self.field.filings()
    }

    pub fn filing_count(&self) -> usize {
        self.filing_count
    }

    /// Current strength shared by both sources
    pub fn strength(&self) -> f64 {
        self.sources[SourceId::Movable.index()].strength()
    }

    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Number of interaction passes run so far
    pub fn pass_count(&self) -> u64 {
        self.passes
    }

    /// Whether anything changed since the last [`Self::clear_dirty`]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Move the movable source back to its configured start, upright
    pub fn reset_movable(&mut self) {
        let start: Vec2 = self.config.movable_position;
        let movable = &mut self.sources[SourceId::Movable.index()];
        let orientation = movable.orientation_degrees();
        movable.rotate(-orientation);
        movable.set_position(start.x, start.y);
        log::info!("Movable source reset to ({}, {})", start.x, start.y);
        self.interact();
    }
}
