// File: crates/gascost/src/config.rs
// Summary: RenderConfig/ChartConfig from TOML with defaults; paths, conversion rate, axis bounds and labels in one place.

use std::fs;
use std::path::{Path, PathBuf};

use gascost_chart::{LegendPosition, Theme};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::EUR_IN_ETH;

/// Configuration file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "gascost.toml";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Results JSON to read.
    pub input: PathBuf,
    /// Chart file to write; `.png` selects raster output, anything else PDF.
    pub output: PathBuf,
    /// Optional CSV dump of the coerced results table.
    pub table: Option<PathBuf>,
    /// EUR per ETH for the secondary axis.
    pub eur_in_eth: f64,
    /// Warden counts on the x axis, one per value in every series.
    pub wardens: Vec<u32>,
    /// Show the chart in a window before exporting (needs the `preview` feature).
    pub show: bool,
    pub chart: ChartConfig,
}

/// Cosmetics of the rendered figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub secondary_label: String,
    pub y_min: f64,
    pub y_max: f64,
    /// Page size in inches.
    pub width_in: f32,
    pub height_in: f32,
    /// Theme preset name (`paper`, `dark`).
    pub theme: String,
    /// Legend placement: `best` (least overlap with the data) or a fixed
    /// anchor such as `upper-left`, `center-right`, `lower-center`.
    pub legend: String,
    pub grid: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data.json"),
            output: PathBuf::from("gasfee.pdf"),
            table: None,
            eur_in_eth: EUR_IN_ETH,
            wardens: default_wardens(),
            show: true,
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "Gas cost of a Thunderdome".to_string(),
            x_label: "Number n of Wardens".to_string(),
            y_label: "USD".to_string(),
            secondary_label: "Ether".to_string(),
            y_min: 0.0,
            y_max: 14.0,
            width_in: 6.2,
            height_in: 6.2,
            theme: "paper".to_string(),
            legend: "best".to_string(),
            grid: false,
        }
    }
}

/// Warden counts the measurements were taken at: 10 to 25 in steps of 3.
pub fn default_wardens() -> Vec<u32> {
    (10..=25).step_by(3).collect()
}

impl RenderConfig {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `gascost.toml` from the working directory, or defaults when it does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Defaults with the three call-site parameters overridden.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>, eur_in_eth: f64) -> Self {
        Self { input: input.into(), output: output.into(), eur_in_eth, ..Self::default() }
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.eur_in_eth.is_finite() && self.eur_in_eth > 0.0) {
            return Err(ConfigError::Invalid(format!("eur_in_eth must be positive, got {}", self.eur_in_eth)));
        }
        if self.wardens.is_empty() {
            return Err(ConfigError::Invalid("wardens must not be empty".to_string()));
        }
        let c = &self.chart;
        if !(c.y_min.is_finite() && c.y_max.is_finite() && c.y_min < c.y_max) {
            return Err(ConfigError::Invalid(format!("y bounds must satisfy y_min < y_max, got {}..{}", c.y_min, c.y_max)));
        }
        if !(c.width_in > 0.0 && c.height_in > 0.0) {
            return Err(ConfigError::Invalid("page size must be positive".to_string()));
        }
        self.theme()?;
        self.legend_position()?;
        Ok(())
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        gascost_chart::theme::find(&self.chart.theme)
            .ok_or_else(|| ConfigError::Invalid(format!("unknown theme `{}`", self.chart.theme)))
    }

    pub fn legend_position(&self) -> Result<LegendPosition, ConfigError> {
        self.chart.legend.parse().map_err(ConfigError::Invalid)
    }
}
