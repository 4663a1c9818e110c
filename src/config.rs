//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`FILINGS_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use filings_core::{Bounds, SimulationConfig, Vec2};
use filings_input::{CountInput, StrengthSlider};
use filings_render::Palette;
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Simulation configuration
    #[serde(default)]
    pub simulation: SimulationSection,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`FILINGS_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Load user config (optional)
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // FILINGS_SIMULATION__FILING_COUNT=2000 -> simulation.filing_count = 2000
        figment = figment.merge(Env::prefixed("FILINGS_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Iron Filings".to_string(),
            width: 400,
            height: 400,
            fullscreen: false,
            vsync: true,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Width of the simulation area in units
    pub width: f64,
    /// Height of the simulation area in units
    pub height: f64,
    /// Initial number of filings
    pub filing_count: usize,
    /// Length of a filing segment
    pub filing_length: f64,
    /// Initial source strength
    pub strength: f64,
    /// Center-to-pole distance of each magnet
    pub source_half_length: f64,
    /// Start of the draggable magnet [x, y]
    pub movable_position: [f64; 2],
    /// Position of the fixed magnet [x, y]
    pub stationary_position: [f64; 2],
    /// RNG seed for filing placement (unset = random every run)
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        let defaults = SimulationConfig::default();
        Self {
            width: defaults.bounds.width,
            height: defaults.bounds.height,
            filing_count: defaults.filing_count,
            filing_length: defaults.filing_length,
            strength: defaults.strength,
            source_half_length: defaults.source_half_length,
            movable_position: [defaults.movable_position.x, defaults.movable_position.y],
            stationary_position: [defaults.stationary_position.x, defaults.stationary_position.y],
            seed: defaults.seed,
        }
    }
}

impl SimulationSection {
    /// Convert to the simulation crate's configuration
    pub fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig {
            bounds: self.bounds(),
            filing_count: self.filing_count,
            filing_length: self.filing_length,
            strength: self.strength,
            source_half_length: self.source_half_length,
            movable_position: Vec2::from(self.movable_position),
            stationary_position: Vec2::from(self.stationary_position),
            seed: self.seed,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Rotation per arrow key press, in degrees
    pub rotate_step_degrees: f64,
    /// Lower end of the strength slider
    pub strength_min: i32,
    /// Upper end of the strength slider
    pub strength_max: i32,
    /// Strength change per Up/Down key press
    pub strength_step: i32,
    /// Filing count change per +/- key press
    pub count_step: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            rotate_step_degrees: 5.0,
            strength_min: 0,
            strength_max: 500,
            strength_step: 10,
            count_step: 100,
        }
    }
}

impl InputConfig {
    /// Build the strength slider starting at `initial`
    pub fn strength_slider(&self, initial: f64) -> StrengthSlider {
        StrengthSlider::new(
            initial.round() as i32,
            self.strength_min,
            self.strength_max,
            self.strength_step,
        )
    }

    /// Build the count input starting at `initial`
    pub fn count_input(&self, initial: usize) -> CountInput {
        CountInput::new(initial, self.count_step)
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Filing color [r, g, b, a]
    pub filing_color: [f32; 4],
    /// North half of each magnet
    pub north_color: [f32; 4],
    /// South half of each magnet
    pub south_color: [f32; 4],
    /// Drop shadow under each magnet
    pub shadow_color: [f32; 4],
    /// Magnet body width in simulation units
    pub magnet_width: f64,
    /// Drop shadow offset in simulation units
    pub shadow_offset: f64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            background_color: palette.background,
            filing_color: palette.filing,
            north_color: palette.north,
            south_color: palette.south,
            shadow_color: palette.shadow,
            magnet_width: palette.magnet_width,
            shadow_offset: palette.shadow_offset,
        }
    }
}

impl RenderingConfig {
    pub fn to_palette(&self) -> Palette {
        Palette {
            background: self.background_color,
            filing: self.filing_color,
            north: self.north_color,
            south: self.south_color,
            shadow: self.shadow_color,
            magnet_width: self.magnet_width,
            shadow_offset: self.shadow_offset,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
