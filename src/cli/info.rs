use anyhow::{Context, Result};
use std::path::PathBuf;

use gcxgc::acquisition::derive_acquisition_parameters;
use gcxgc::grid::compute_grid_shape;
use gcxgc::preset::Preset;
use gcxgc::trace::RawTrace;

/// Display acquisition parameters of a trace file
pub fn run(file: PathBuf, modulation_period: Option<f64>, preset: Option<Preset>) -> Result<()> {
    if !file.exists() {
        anyhow::bail!("File does not exist: {}", file.display());
    }

    let trace = RawTrace::from_csv_file(&file)
        .with_context(|| format!("Failed to parse trace: {}", file.display()))?;

    println!("GCxGC Trace Information");
    println!("=======================");
    println!("File: {}", file.display());
    println!();

    let time = trace.time();
    let signal = trace.signal();
    let (min, max) = signal
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    println!("Trace:");
    println!("  Data points: {}", trace.len());
    println!("  Time range: {} - {} min", time[0], trace.runtime());
    println!("  Signal range: {} - {}", min, max);
    println!();

    let Some(seconds) = modulation_period.or(preset.map(|p| p.modulation_period())) else {
        println!("Pass --modulation-period or --preset to show the grid layout.");
        return Ok(());
    };

    let params = derive_acquisition_parameters(&trace, seconds)
        .context("Failed to derive acquisition parameters")?;
    let shape = compute_grid_shape(&params).context("Failed to compute grid shape")?;

    println!("Acquisition:");
    println!("  Rate: {} Hz (exact {:.4} Hz)", params.rate, params.exact_rate());
    println!("  Modulation period: {} s", params.modulation_period);
    println!("  Samples per cycle: {:.3}", params.samples_per_cycle());
    println!();

    println!("Grid:");
    println!("  Shape: {} (second dimension x first dimension)", shape);
    println!("  Modulation cycles: {}", shape.rows);
    println!("  Padding: {} samples", shape.padding_for(params.numpoints));

    Ok(())
}
