//! Configuration file support for Wellp.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wellp/config.toml`.

use crate::{Category, Error, Result, VolumeTarget};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub program: ProgramConfig,

    #[serde(default)]
    pub wellbeing: WellbeingThresholds,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Program generation parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Allowed fractional deviation from a category target
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Session length used for goal-based programs when none is given
    #[serde(default = "default_duration")]
    pub default_duration: u32,

    #[serde(default = "default_max_history_size")]
    pub max_history_size: usize,

    #[serde(default)]
    pub rpe: RpeConfig,

    #[serde(default)]
    pub targets: TargetTables,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            default_duration: default_duration(),
            max_history_size: default_max_history_size(),
            rpe: RpeConfig::default(),
            targets: TargetTables::default(),
        }
    }
}

/// RPE bucket thresholds
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct RpeConfig {
    /// RPE at or below this uses the low-intensity table
    #[serde(default = "default_rpe_low")]
    pub low: u8,

    /// RPE at or above this uses the high-intensity table
    #[serde(default = "default_rpe_high")]
    pub high: u8,
}

impl Default for RpeConfig {
    fn default() -> Self {
        Self {
            low: default_rpe_low(),
            high: default_rpe_high(),
        }
    }
}

/// Volume target tables per RPE bucket
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct TargetTables {
    #[serde(default = "default_high_targets")]
    pub high: VolumeTarget,

    #[serde(default = "default_low_targets")]
    pub low: VolumeTarget,

    #[serde(default = "default_default_targets")]
    pub default: VolumeTarget,
}

impl Default for TargetTables {
    fn default() -> Self {
        Self {
            high: default_high_targets(),
            low: default_low_targets(),
            default: default_default_targets(),
        }
    }
}

/// Thresholds used when turning wellbeing logs into recommendations
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct WellbeingThresholds {
    #[serde(default = "default_sleep_poor")]
    pub sleep_poor: u8,
    #[serde(default = "default_moderate")]
    pub sleep_moderate: u8,
    #[serde(default = "default_good")]
    pub sleep_good: u8,
    #[serde(default = "default_top")]
    pub sleep_excellent: u8,

    #[serde(default = "default_energy_low")]
    pub energy_low: u8,
    #[serde(default = "default_moderate")]
    pub energy_moderate: u8,
    #[serde(default = "default_good")]
    pub energy_high: u8,
    #[serde(default = "default_top")]
    pub energy_very_high: u8,

    /// Number of pain areas considered significant
    #[serde(default = "default_significant_pain_count")]
    pub significant_pain_count: usize,
}

impl Default for WellbeingThresholds {
    fn default() -> Self {
        Self {
            sleep_poor: default_sleep_poor(),
            sleep_moderate: default_moderate(),
            sleep_good: default_good(),
            sleep_excellent: default_top(),
            energy_low: default_energy_low(),
            energy_moderate: default_moderate(),
            energy_high: default_good(),
            energy_very_high: default_top(),
            significant_pain_count: default_significant_pain_count(),
        }
    }
}

/// User-defined exercise appended to the built-in catalog
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomExercise {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub duration: u32,
    #[serde(default = "default_level")]
    pub level: u8,
    pub areas: Vec<String>,
}

/// Catalog extension configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub custom: Vec<CustomExercise>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        std::env::var("HOME")
            .map(|home| PathBuf::from(home).join(".local/share"))
            .unwrap_or_else(|_| PathBuf::from("."))
    });
    base.join("wellp")
}

fn default_tolerance() -> f64 {
    0.1
}

fn default_duration() -> u32 {
    30
}

fn default_max_history_size() -> usize {
    10
}

fn default_rpe_low() -> u8 {
    3
}

fn default_rpe_high() -> u8 {
    7
}

fn default_high_targets() -> VolumeTarget {
    VolumeTarget {
        stretch: 10,
        lfc: 15,
        meditation: 10,
    }
}

fn default_low_targets() -> VolumeTarget {
    VolumeTarget {
        stretch: 20,
        lfc: 25,
        meditation: 10,
    }
}

fn default_default_targets() -> VolumeTarget {
    VolumeTarget {
        stretch: 15,
        lfc: 20,
        meditation: 10,
    }
}

fn default_sleep_poor() -> u8 {
    2
}

fn default_energy_low() -> u8 {
    2
}

fn default_moderate() -> u8 {
    3
}

fn default_good() -> u8 {
    4
}

fn default_top() -> u8 {
    5
}

fn default_significant_pain_count() -> usize {
    3
}

fn default_level() -> u8 {
    1
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });
        base.join("wellp").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check numeric settings for values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        let program = &self.program;
        if !(0.0..1.0).contains(&program.tolerance) {
            return Err(Error::Config(format!(
                "program.tolerance must be in [0, 1), got {}",
                program.tolerance
            )));
        }
        if program.rpe.low >= program.rpe.high {
            return Err(Error::Config(format!(
                "program.rpe.low ({}) must be below program.rpe.high ({})",
                program.rpe.low, program.rpe.high
            )));
        }
        if program.max_history_size == 0 {
            return Err(Error::Config(
                "program.max_history_size must be at least 1".into(),
            ));
        }
        if program.default_duration == 0 {
            return Err(Error::Config(
                "program.default_duration must be positive".into(),
            ));
        }
        Ok(())
    }
}
