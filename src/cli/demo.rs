use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use gcxgc::preset::Preset;

/// Simulated run length in minutes
const RUNTIME_MINUTES: f64 = 20.0;

/// Simulated detector sampling rate in Hz
const RATE_HZ: usize = 10;

/// A simulated analyte: first-dimension retention (min), second-dimension
/// retention as a fraction of the modulation period, and peak height.
struct Compound {
    name: &'static str,
    first_dimension: f64,
    second_dimension: f64,
    height: f64,
}

const fn compound(
    name: &'static str,
    first_dimension: f64,
    second_dimension: f64,
    height: f64,
) -> Compound {
    Compound {
        name,
        first_dimension,
        second_dimension,
        height,
    }
}

const COMPOUNDS: &[Compound] = &[
    compound("n-heptane", 2.4, 0.18, 850.0),
    compound("toluene", 3.9, 0.52, 1400.0),
    compound("n-octane", 4.6, 0.21, 700.0),
    compound("ethylbenzene", 6.8, 0.55, 520.0),
    compound("p-xylene", 7.1, 0.58, 980.0),
    compound("n-nonane", 8.3, 0.24, 610.0),
    compound("1,2,4-trimethylbenzene", 11.2, 0.63, 760.0),
    compound("n-decane", 12.0, 0.27, 450.0),
    compound("naphthalene", 15.5, 0.81, 330.0),
    compound("n-dodecane", 17.4, 0.31, 290.0),
];

/// First-dimension peak width (standard deviation), minutes
const FIRST_DIMENSION_WIDTH: f64 = 0.06;

/// Second-dimension peak width (standard deviation), seconds
const SECOND_DIMENSION_WIDTH: f64 = 0.07;

/// Generate a demo GCxGC trace file
pub fn run(output: PathBuf, preset: Preset) -> Result<()> {
    info!("gcxgc Demo - synthetic GCxGC trace");
    info!("==================================");
    info!("Preset: {} ({} s modulation)", preset, preset.modulation_period());

    let (time, signal) = generate_trace(preset.modulation_period());
    for compound in COMPOUNDS {
        info!(
            "  {} at {} min / {:.2} s",
            compound.name,
            compound.first_dimension,
            compound.second_dimension * preset.modulation_period()
        );
    }

    write_trace(&output, &time, &signal)
        .with_context(|| format!("Failed to write demo trace: {}", output.display()))?;

    info!("Demo trace written!");
    info!("  Output file: {}", output.display());
    info!("  Data points: {}", time.len());
    info!(
        "  Try: gcxgc convert {} --preset {}",
        output.display(),
        preset
    );

    Ok(())
}

/// Synthetic detector trace for a modulator with `modulation_period` seconds.
fn generate_trace(modulation_period: f64) -> (Vec<f64>, Vec<f64>) {
    let numpoints = RUNTIME_MINUTES as usize * 60 * RATE_HZ;
    let samples_per_minute = (60 * RATE_HZ) as f64;

    let time: Vec<f64> = (0..numpoints)
        .map(|i| i as f64 / samples_per_minute)
        .collect();

    let signal = time
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            let seconds = t * 60.0;
            let cycle = (seconds / modulation_period).floor();
            let phase = seconds - cycle * modulation_period;
            // Each modulation releases what eluted from the first column during that cycle
            let cycle_center = (cycle + 0.5) * modulation_period / 60.0;

            let peaks: f64 = COMPOUNDS
                .iter()
                .map(|c| {
                    let d1 = (cycle_center - c.first_dimension) / FIRST_DIMENSION_WIDTH;
                    let center = c.second_dimension * modulation_period;
                    let d2 = (phase - center) / SECOND_DIMENSION_WIDTH;
                    c.height * (-0.5 * (d1 * d1 + d2 * d2)).exp()
                })
                .sum();

            let baseline = 2.0 + 0.05 * t;
            let noise = (i as f64 * 0.37).sin() * 0.05;
            baseline + noise + peaks
        })
        .collect();

    (time, signal)
}

/// Write a trace with the three-row header the parser expects.
fn write_trace(path: &Path, time: &[f64], signal: &[f64]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["Time (min)", "Signal (pA)"])?;
    writer.write_record(["Detector", "FID1A"])?;
    writer.write_record(["Software", env!("CARGO_PKG_NAME")])?;
    for (t, s) in time.iter().zip(signal) {
        writer.write_record([format!("{:.5}", t), format!("{:.4}", s)])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcxgc::pipeline::{reconstruct, ReconstructRequest};
    use gcxgc::trace::RawTrace;
    use tempfile::tempdir;

    #[test]
    fn test_demo_trace_reshapes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("demo.csv");
        let (time, signal) = generate_trace(Preset::Gasoline.modulation_period());
        write_trace(&path, &time, &signal).unwrap();

        let trace = RawTrace::from_csv_file(&path).unwrap();
        assert_eq!(trace.len(), 12_000);

        let result = reconstruct(&trace, &ReconstructRequest::new(Preset::Gasoline)).unwrap();
        assert_eq!(result.params.rate, RATE_HZ);
        assert_eq!(result.matrix.shape(), (30, 400));
        assert_eq!(result.matrix.padding(), 0);
    }

    #[test]
    fn test_demo_peak_lands_in_cell() {
        let period = Preset::Biodiesel.modulation_period();
        let (time, signal) = generate_trace(period);
        let trace = RawTrace::new(time, signal).unwrap();
        let result = reconstruct(&trace, &ReconstructRequest::new(Preset::Biodiesel)).unwrap();

        // toluene: 3.9 min, 52% into the cycle
        let matrix = result.matrix.as_array();
        let column = (3.9 * 60.0 / period) as usize;
        let row = (0.52 * period * RATE_HZ as f64).round() as usize;
        assert!(matrix[[row, column]] > 100.0);
        assert!(matrix[[row, column]] > 10.0 * matrix[[row, column + 20]]);
    }
}
