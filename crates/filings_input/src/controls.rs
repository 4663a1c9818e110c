//! Numeric UI controls
//!
//! The strength slider and the filing count input are plain value holders
//! with the clamping rules of their HTML counterparts. They emit the value
//! to send to the simulation; they never touch it themselves.

use filings_core::MAX_FILING_COUNT;

/// Integer slider for the shared source strength
#[derive(Clone, Debug, PartialEq)]
pub struct StrengthSlider {
    value: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Default for StrengthSlider {
    fn default() -> Self {
        Self::new(150, 0, 500, 10)
    }
}

impl StrengthSlider {
    /// Create a slider; the initial value is clamped into `[min, max]`
    pub fn new(value: i32, min: i32, max: i32, step: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Set the slider position, clamped to its range. Returns the new value.
    pub fn set(&mut self, value: i32) -> i32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    /// Move by `steps` increments. Returns the new value.
    pub fn nudge(&mut self, steps: i32) -> i32 {
        self.set(self.value.saturating_add(steps.saturating_mul(self.step)))
    }
}

/// Result of editing the count input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountChange {
    /// Count to hand to the simulation, within `[0, max]`
    pub count: usize,
    /// The requested value was above the maximum (display only)
    pub exceeded_max: bool,
}

/// Numeric input for the filing population size
#[derive(Clone, Debug, PartialEq)]
pub struct CountInput {
    value: usize,
    pub max: usize,
    pub step: usize,
}

impl Default for CountInput {
    fn default() -> Self {
        Self::new(700, 100)
    }
}

impl CountInput {
    pub fn new(value: usize, step: usize) -> Self {
        Self {
            value: value.min(MAX_FILING_COUNT),
            max: MAX_FILING_COUNT,
            step,
        }
    }

    pub fn value(&self) -> usize {
        self.value
    }

    /// Enter a raw value
    ///
    /// Negative values clamp to 0, values above `max` clamp to `max` and
    /// raise the advisory flag.
    pub fn set(&mut self, requested: i64) -> CountChange {
        let exceeded_max = requested > self.max as i64;
        self.value = requested.clamp(0, self.max as i64) as usize;
        CountChange {
            count: self.value,
            exceeded_max,
        }
    }

    /// Step the value up or down by `steps` increments
    pub fn nudge(&mut self, steps: i64) -> CountChange {
        let requested = (self.value as i64).saturating_add(steps.saturating_mul(self.step as i64));
        self.set(requested)
    }
}
