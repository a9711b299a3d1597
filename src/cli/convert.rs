use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use gcxgc::colorscale::Colorscale;
use gcxgc::export::{write_csv_tables, write_json, ExportFormat, Provenance, RenderBundle};
use gcxgc::pipeline::{reconstruct, ReconstructRequest, DEFAULT_POWER};
use gcxgc::preset::{ModulationPeriod, Preset};
use gcxgc::trace::RawTrace;
use gcxgc::views::NegativePolicy;

use super::config::Config;

/// Command-line options for `convert`, before merging with the config file.
pub struct ConvertArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub format: Option<ExportFormat>,
    pub modulation_period: Option<f64>,
    pub preset: Option<Preset>,
    pub power: Option<u8>,
    pub slice_time: Option<f64>,
    pub colorscale: Option<Colorscale>,
    pub no_smoothing: bool,
    pub negative_policy: Option<NegativePolicy>,
    pub include_raw: bool,
    pub config: Option<PathBuf>,
}

/// Accepted enhancement powers on the command line and in config files
pub const POWER_RANGE: std::ops::RangeInclusive<u8> = 1..=100;

/// Pick the enhancement power: flag, then config, then the default.
fn resolve_power(flag: Option<u8>, config: Option<u8>) -> Result<f64> {
    match flag.or(config) {
        Some(power) if POWER_RANGE.contains(&power) => Ok(f64::from(power)),
        Some(power) => anyhow::bail!(
            "Power must be between {} and {}, got {}",
            POWER_RANGE.start(),
            POWER_RANGE.end(),
            power
        ),
        None => Ok(DEFAULT_POWER),
    }
}

/// Reshape a trace and export the result
pub fn run(args: ConvertArgs) -> Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file does not exist: {}", args.input.display());
    }

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::from_file(path)?
        }
        None => Config::default(),
    };
    let reshape = &config.reshape;

    let format = args.format.unwrap_or_default();
    let modulation_period = ModulationPeriod::resolve(
        args.modulation_period.or(reshape.modulation_period),
        args.preset.or(reshape.preset),
    )?;
    let include_raw = args.include_raw || reshape.include_raw.unwrap_or(false);
    let smoothing = !args.no_smoothing && reshape.smoothing.unwrap_or(true);

    let request = ReconstructRequest::new(modulation_period)
        .with_power(resolve_power(args.power, reshape.power)?)
        .with_slice_time(args.slice_time.or(reshape.slice_time).unwrap_or(0.0))
        .with_colorscale(args.colorscale.or(reshape.colorscale).unwrap_or_default())
        .with_smoothing(smoothing)
        .with_negative_policy(
            args.negative_policy
                .or(reshape.negative_policy)
                .unwrap_or_default(),
        );

    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        match format {
            ExportFormat::Json => args.input.with_file_name(format!("{}.gcxgc.json", stem)),
            ExportFormat::Csv => args.input.with_file_name(format!("{}_gcxgc", stem)),
        }
    });

    info!("gcxgc Converter - trace to GCxGC heatmap");
    info!("========================================");
    info!("Input:  {}", args.input.display());
    info!("Output: {}", output.display());
    info!("Format: {}", format);
    info!("Modulation period: {} s", modulation_period.seconds());
    info!("Power: {}", request.power);

    let reader_config = config.input.reader_config()?;
    let trace = RawTrace::from_csv_file_with(&args.input, &reader_config)
        .with_context(|| format!("Failed to parse trace: {}", args.input.display()))?;
    let result = reconstruct(&trace, &request).context("Reconstruction failed")?;

    match format {
        ExportFormat::Json => {
            let source = args
                .input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned());
            let bundle = RenderBundle::new(&result, include_raw, Provenance::now(source));
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            write_json(BufWriter::new(file), &bundle, true)
                .context("Failed to write JSON bundle")?;
        }
        ExportFormat::Csv => {
            write_csv_tables(&output, &result).context("Failed to write CSV tables")?;
        }
    }

    info!("Conversion complete!");
    info!(
        "  Heatmap: {} cycles x {} samples",
        result.matrix.first_dimension_len(),
        result.matrix.second_dimension_len()
    );
    info!("  Padding: {} samples", result.matrix.padding());
    info!(
        "  Slice: column {} at {} min",
        result.slice_index, result.slice_time
    );

    Ok(())
}
