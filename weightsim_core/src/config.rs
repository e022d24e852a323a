//! Configuration file support for weightsim.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/weightsim/config.toml`.

use crate::report::CsvReportOptions;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub report: ReportConfig,
}

/// Input values used when a CLI flag is omitted
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_age")]
    pub age_years: u32,

    #[serde(default = "default_initial_weight")]
    pub initial_weight_kg: f64,

    #[serde(default = "default_target_weight")]
    pub target_weight_kg: f64,

    #[serde(default = "default_intake")]
    pub daily_intake_kcal: f64,

    #[serde(default = "default_horizon")]
    pub horizon_days: u32,

    #[serde(default = "default_step_size")]
    pub step_size_days: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            age_years: default_age(),
            initial_weight_kg: default_initial_weight(),
            target_weight_kg: default_target_weight(),
            daily_intake_kcal: default_intake(),
            horizon_days: default_horizon(),
            step_size_days: default_step_size(),
        }
    }
}

/// Inclusive range for one input
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Range<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy + std::fmt::Display> Range<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check `value`, naming the input in the error
    pub fn check(&self, what: &str, value: T) -> Result<()> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(Error::InputRange(format!(
                "{} must be between {} and {} (got {})",
                what, self.min, self.max, value
            )))
        }
    }
}

/// Plausible human ranges enforced by the CLI before simulating
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_age_range")]
    pub age_years: Range<u32>,

    #[serde(default = "default_weight_range")]
    pub weight_kg: Range<f64>,

    #[serde(default = "default_intake_range")]
    pub daily_intake_kcal: Range<f64>,

    #[serde(default = "default_horizon_range")]
    pub horizon_days: Range<u32>,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            age_years: default_age_range(),
            weight_kg: default_weight_range(),
            daily_intake_kcal: default_intake_range(),
            horizon_days: default_horizon_range(),
        }
    }
}

/// CSV report settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default = "default_decimal_comma")]
    pub decimal_comma: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            delimiter: default_delimiter(),
            decimal_comma: default_decimal_comma(),
        }
    }
}

impl ReportConfig {
    /// Convert to writer options. The delimiter must be a single ASCII byte.
    pub fn csv_options(&self) -> Result<CsvReportOptions> {
        if !self.delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "report delimiter must be ASCII (got {:?})",
                self.delimiter
            )));
        }
        Ok(CsvReportOptions {
            delimiter: self.delimiter as u8,
            decimal_comma: self.decimal_comma,
        })
    }
}

// Default value functions
fn default_name() -> String {
    "Oscar González".into()
}

fn default_age() -> u32 {
    25
}

fn default_initial_weight() -> f64 {
    80.0
}

fn default_target_weight() -> f64 {
    75.0
}

fn default_intake() -> f64 {
    1800.0
}

fn default_horizon() -> u32 {
    30
}

fn default_step_size() -> f64 {
    crate::types::DEFAULT_STEP_SIZE_DAYS
}

fn default_age_range() -> Range<u32> {
    Range::new(10, 100)
}

fn default_weight_range() -> Range<f64> {
    Range::new(30.0, 200.0)
}

fn default_intake_range() -> Range<f64> {
    Range::new(1000.0, 6000.0)
}

fn default_horizon_range() -> Range<u32> {
    Range::new(5, 365)
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_delimiter() -> char {
    ';'
}

fn default_decimal_comma() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            other => {
                tracing::debug!("No config file found at {:?}, using defaults", other);
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if a config directory is known
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("weightsim").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}
