//! Modulation period presets for the bundled example datasets.
//!
//! Presets name a fixed modulation period so that well-known samples can be
//! reshaped without the user looking the period up.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidParameterError;

/// Example datasets with a known modulation period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Gasoline run, 3.0 s modulation period
    Gasoline,
    /// Biodiesel run, 3.3 s modulation period
    Biodiesel,
}

impl Preset {
    /// Modulation period in seconds for this preset.
    pub fn modulation_period(&self) -> f64 {
        match self {
            Preset::Gasoline => 3.0,
            Preset::Biodiesel => 3.3,
        }
    }

    /// Returns all available preset names.
    pub fn variants() -> &'static [&'static str] {
        &["gasoline", "biodiesel"]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Gasoline => write!(f, "gasoline"),
            Preset::Biodiesel => write!(f, "biodiesel"),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "gasoline" => Ok(Preset::Gasoline),
            "biodiesel" => Ok(Preset::Biodiesel),
            _ => Err(format!(
                "Unknown preset '{}'. Valid options: {}",
                s,
                Preset::variants().join(", ")
            )),
        }
    }
}

/// Where the modulation period comes from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModulationPeriod {
    /// Explicit user entry in seconds
    Seconds(f64),
    /// Period fixed by an example dataset
    Preset(Preset),
}

impl ModulationPeriod {
    /// Pick the modulation period from an explicit value or a preset.
    ///
    /// An explicit value takes precedence. Neither is an error, matching the
    /// prompt shown when the period field is left empty.
    pub fn resolve(
        seconds: Option<f64>,
        preset: Option<Preset>,
    ) -> Result<Self, InvalidParameterError> {
        match (seconds, preset) {
            (Some(s), _) => Ok(ModulationPeriod::Seconds(s)),
            (None, Some(p)) => Ok(ModulationPeriod::Preset(p)),
            (None, None) => Err(InvalidParameterError::MissingModulationPeriod),
        }
    }

    /// Period in seconds.
    pub fn seconds(&self) -> f64 {
        match self {
            ModulationPeriod::Seconds(s) => *s,
            ModulationPeriod::Preset(p) => p.modulation_period(),
        }
    }
}

impl From<Preset> for ModulationPeriod {
    fn from(preset: Preset) -> Self {
        ModulationPeriod::Preset(preset)
    }
}

impl From<f64> for ModulationPeriod {
    fn from(seconds: f64) -> Self {
        ModulationPeriod::Seconds(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_periods() {
        assert_eq!(Preset::Gasoline.modulation_period(), 3.0);
        assert_eq!(Preset::Biodiesel.modulation_period(), 3.3);
    }

    #[test]
    fn test_preset_parse_roundtrip() {
        for name in Preset::variants() {
            let preset: Preset = name.parse().unwrap();
            assert_eq!(preset.to_string(), *name);
        }
        assert_eq!("Gasoline".parse::<Preset>(), Ok(Preset::Gasoline));
        assert!("diesel".parse::<Preset>().is_err());
    }

    #[test]
    fn test_explicit_period_wins() {
        let period = ModulationPeriod::resolve(Some(4.0), Some(Preset::Gasoline)).unwrap();
        assert_eq!(period.seconds(), 4.0);

        let period = ModulationPeriod::resolve(None, Some(Preset::Biodiesel)).unwrap();
        assert_eq!(period, ModulationPeriod::Preset(Preset::Biodiesel));
        assert_eq!(period.seconds(), 3.3);
    }

    #[test]
    fn test_missing_period() {
        assert_eq!(
            ModulationPeriod::resolve(None, None),
            Err(InvalidParameterError::MissingModulationPeriod)
        );
    }
}
