use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::acquisition::AcquisitionParameters;
use crate::colorscale::Colorscale;
use crate::grid::GridShape;
use crate::pipeline::Reconstruction;

use super::ExportError;

/// Where and when a bundle was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Producing software name
    pub software: String,

    /// Producing software version
    pub version: String,

    /// RFC 3339 timestamp of the export
    pub generated_at: String,

    /// Source trace file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Provenance {
    /// Provenance stamped with this crate's name, version and the current time.
    pub fn now(source: Option<String>) -> Self {
        Self {
            software: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            source,
        }
    }
}

/// Heatmap arrays: `z[j][i]` is plotted at `(x[i], y[j])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapView {
    /// First-dimension time, minutes
    pub x: Vec<f64>,
    /// Second-dimension time, seconds
    pub y: Vec<f64>,
    /// Enhanced matrix rows
    pub z: Vec<Vec<f64>>,
    /// Unenhanced matrix rows, when requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<Vec<Vec<f64>>>,
    /// Colorscale hint
    pub colorscale: Colorscale,
    /// Smoothing hint
    pub smoothing: bool,
    /// Enhancement power applied to `z`
    pub power: f64,
}

/// Extracted 2D chromatogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceView {
    /// Requested first-dimension time, minutes
    pub time: f64,
    /// Matrix column index
    pub index: usize,
    /// Second-dimension time, seconds
    pub x: Vec<f64>,
    /// Signal
    pub y: Vec<f64>,
}

/// Vertical marker on the projection plot at the slice time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionMarker {
    /// First-dimension time, minutes
    pub x: f64,
    /// Marker height
    pub y_max: f64,
}

/// Projected 1D chromatogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionView {
    /// First-dimension time, minutes
    pub x: Vec<f64>,
    /// Column sums
    pub y: Vec<f64>,
    /// Slice marker
    pub marker: ProjectionMarker,
}

/// Everything the renderer draws, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderBundle {
    /// Export provenance
    pub provenance: Provenance,
    /// Acquisition parameters
    pub parameters: AcquisitionParameters,
    /// Row-major grid shape
    pub shape: GridShape,
    /// Heatmap
    pub heatmap: HeatmapView,
    /// Extracted 2D chromatogram
    pub slice: SliceView,
    /// Projected 1D chromatogram
    pub projection: ProjectionView,
}

impl RenderBundle {
    /// Build a bundle from a reconstruction.
    ///
    /// The heatmap `power` is the exponent the reconstruction enhanced with.
    pub fn new(reconstruction: &Reconstruction, include_raw: bool, provenance: Provenance) -> Self {
        let r = reconstruction;
        Self {
            provenance,
            parameters: r.params,
            shape: r.shape,
            heatmap: HeatmapView {
                x: r.axes.first_dimension.clone(),
                y: r.axes.second_dimension.clone(),
                z: r.enhanced.to_rows(),
                raw: include_raw.then(|| r.matrix.to_rows()),
                colorscale: r.colorscale,
                smoothing: r.smoothing,
                power: r.power,
            },
            slice: SliceView {
                time: r.slice_time,
                index: r.slice_index,
                x: r.axes.second_dimension.clone(),
                y: r.slice.clone(),
            },
            projection: ProjectionView {
                x: r.axes.first_dimension.clone(),
                y: r.projection.clone(),
                marker: ProjectionMarker {
                    x: r.slice_time,
                    y_max: r.projection_max(),
                },
            },
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self, pretty: bool) -> Result<String, ExportError> {
        if pretty {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string(self)?)
        }
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, ExportError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Write a bundle as JSON to any writer.
pub fn write_json<W: Write>(
    mut writer: W,
    bundle: &RenderBundle,
    pretty: bool,
) -> Result<(), ExportError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, bundle)?;
    } else {
        serde_json::to_writer(&mut writer, bundle)?;
    }
    writer.write_all(b"\n")?;
    Ok(())
}
