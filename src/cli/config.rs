//! TOML configuration file support for repeated conversions.
//!
//! Instead of passing many CLI flags, users can specify settings in a config file:
//!
//! ```toml
//! # gcxgc.toml
//! [reshape]
//! preset = "biodiesel"
//! power = 8
//! slice_time = 12.5
//! colorscale = "inferno"
//! smoothing = false
//! negative_policy = "clamp-to-zero"
//! include_raw = true
//!
//! [input]
//! delimiter = "tab"
//! ```
//!
//! Flags given on the command line override values from the file.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use gcxgc::colorscale::Colorscale;
use gcxgc::preset::Preset;
use gcxgc::trace::TraceReaderConfig;
use gcxgc::views::NegativePolicy;

/// Root configuration structure for gcxgc.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Reshaping and display settings.
    #[serde(default)]
    pub reshape: ReshapeConfig,

    /// Input file layout.
    #[serde(default)]
    pub input: InputConfig,
}

/// Configuration for the convert command.
#[derive(Debug, Default, Deserialize)]
pub struct ReshapeConfig {
    /// Modulation period in seconds.
    pub modulation_period: Option<f64>,

    /// Example dataset preset, used when no explicit period is set.
    pub preset: Option<Preset>,

    /// Enhancement power, 1 to 100.
    pub power: Option<u8>,

    /// Extracted-slice time in minutes.
    pub slice_time: Option<f64>,

    /// Heatmap colorscale hint.
    pub colorscale: Option<Colorscale>,

    /// Heatmap smoothing hint.
    pub smoothing: Option<bool>,

    /// Treatment of negative values during enhancement.
    pub negative_policy: Option<NegativePolicy>,

    /// Include the unenhanced matrix in JSON output.
    pub include_raw: Option<bool>,
}

/// Layout of the input trace file.
#[derive(Debug, Default, Deserialize)]
pub struct InputConfig {
    /// Field delimiter: a single character, or `"tab"`.
    pub delimiter: Option<String>,
}

impl InputConfig {
    /// Reader configuration for the configured delimiter.
    pub fn reader_config(&self) -> Result<TraceReaderConfig> {
        match self.delimiter.as_deref() {
            None => Ok(TraceReaderConfig::default()),
            Some("tab") | Some("\t") => Ok(TraceReaderConfig::tsv()),
            Some(d) if d.len() == 1 => Ok(TraceReaderConfig {
                delimiter: d.as_bytes()[0],
            }),
            Some(d) => bail!("Invalid delimiter '{}': expected a single character or \"tab\"", d),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [reshape]
            modulation_period = 4.5
            preset = "biodiesel"
            power = 8
            slice_time = 12.5
            colorscale = "inferno"
            smoothing = false
            negative_policy = "clamp-to-zero"
            include_raw = true

            [input]
            delimiter = ";"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.reshape.modulation_period, Some(4.5));
        assert_eq!(config.reshape.preset, Some(Preset::Biodiesel));
        assert_eq!(config.reshape.power, Some(8));
        assert_eq!(config.reshape.slice_time, Some(12.5));
        assert_eq!(config.reshape.colorscale, Some(Colorscale::Inferno));
        assert_eq!(config.reshape.smoothing, Some(false));
        assert_eq!(config.reshape.negative_policy, Some(NegativePolicy::ClampToZero));
        assert_eq!(config.reshape.include_raw, Some(true));
        assert_eq!(config.input.reader_config().unwrap().delimiter, b';');
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [reshape]
            power = 4
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.reshape.power, Some(4));
        assert_eq!(config.reshape.modulation_period, None);
        assert_eq!(config.input.reader_config().unwrap().delimiter, b',');
    }

    #[test]
    fn test_power_must_be_whole() {
        // range checks happen in convert; the type rejects fractions and overflow
        let config = Config::from_str("[reshape]\npower = 0").unwrap();
        assert_eq!(config.reshape.power, Some(0));
        assert!(Config::from_str("[reshape]\npower = 2.5").is_err());
        assert!(Config::from_str("[reshape]\npower = 300").is_err());
        assert!(Config::from_str("[reshape]\npower = -1").is_err());
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.reshape.preset, None);
        assert!(config.input.delimiter.is_none());
    }

    #[test]
    fn test_tab_delimiter() {
        let config = Config::from_str("[input]\ndelimiter = \"tab\"").unwrap();
        assert_eq!(config.input.reader_config().unwrap().delimiter, b'\t');

        let config = Config::from_str("[input]\ndelimiter = \"::\"").unwrap();
        assert!(config.input.reader_config().is_err());
    }

    #[test]
    fn test_unknown_preset_rejected() {
        assert!(Config::from_str("[reshape]\npreset = \"diesel\"").is_err());
    }
}
