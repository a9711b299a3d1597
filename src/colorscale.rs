//! Colorscale names understood by the heatmap renderer.
//!
//! The reshaping core never interprets the colorscale; it is carried through
//! to the exported bundle as a rendering hint.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Heatmap colorscale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Colorscale {
    /// Rainbow (default)
    #[default]
    Rainbow,
    /// Jet
    Jet,
    /// Inferno (dark to bright yellow)
    Inferno,
    /// Thermal
    Thermal,
    /// Portland
    Portland,
    /// Spectral (diverging)
    Spectral,
    /// Balance (diverging blue/red)
    Balance,
    /// Edge (cyclic)
    Edge,
    /// HSV (cyclic)
    Hsv,
}

impl Colorscale {
    /// All colorscales in selector order.
    pub const ALL: [Colorscale; 9] = [
        Colorscale::Rainbow,
        Colorscale::Jet,
        Colorscale::Inferno,
        Colorscale::Thermal,
        Colorscale::Portland,
        Colorscale::Spectral,
        Colorscale::Balance,
        Colorscale::Edge,
        Colorscale::Hsv,
    ];

    /// Renderer name of this colorscale.
    pub fn as_str(&self) -> &'static str {
        match self {
            Colorscale::Rainbow => "rainbow",
            Colorscale::Jet => "jet",
            Colorscale::Inferno => "inferno",
            Colorscale::Thermal => "thermal",
            Colorscale::Portland => "portland",
            Colorscale::Spectral => "spectral",
            Colorscale::Balance => "balance",
            Colorscale::Edge => "edge",
            Colorscale::Hsv => "hsv",
        }
    }

    /// Returns all available colorscale names.
    pub fn variants() -> &'static [&'static str] {
        &[
            "rainbow", "jet", "inferno", "thermal", "portland", "spectral", "balance", "edge",
            "hsv",
        ]
    }
}

impl fmt::Display for Colorscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Colorscale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.to_lowercase();
        Colorscale::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| {
                format!(
                    "Unknown colorscale '{}'. Valid options: {}",
                    s,
                    Colorscale::variants().join(", ")
                )
            })
    }
}
