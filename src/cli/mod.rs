use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use gcxgc::colorscale::Colorscale;
use gcxgc::export::ExportFormat;
use gcxgc::preset::Preset;
use gcxgc::views::NegativePolicy;

mod convert;
mod demo;
mod info;
mod validate;

mod config;

/// gcxgc - GCxGC heatmaps from 1D detector traces
#[derive(Parser)]
#[command(name = "gcxgc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Modulation period preset.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PresetArg {
    /// Gasoline example, 3.0 s
    Gasoline,
    /// Biodiesel example, 3.3 s
    Biodiesel,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Gasoline => Preset::Gasoline,
            PresetArg::Biodiesel => Preset::Biodiesel,
        }
    }
}

/// Output format for `convert`.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum FormatArg {
    /// Single JSON render bundle
    #[default]
    Json,
    /// Directory of CSV tables
    Csv,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Csv => ExportFormat::Csv,
        }
    }
}

/// Treatment of negative values during enhancement.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum NegativePolicyArg {
    /// sign(x) * |x|^(1/power)
    SignPreserving,
    /// Negative values become 0
    ClampToZero,
    /// Negative values become NaN
    Nan,
}

impl From<NegativePolicyArg> for NegativePolicy {
    fn from(arg: NegativePolicyArg) -> Self {
        match arg {
            NegativePolicyArg::SignPreserving => NegativePolicy::SignPreserving,
            NegativePolicyArg::ClampToZero => NegativePolicy::ClampToZero,
            NegativePolicyArg::Nan => NegativePolicy::Nan,
        }
    }
}

/// Modulation period selection shared by several commands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PeriodArgs {
    /// Modulation period in seconds
    #[arg(short = 'm', long, value_name = "SECONDS", conflicts_with = "preset")]
    modulation_period: Option<f64>,

    /// Use the modulation period of an example dataset
    #[arg(short = 'p', long, value_enum)]
    preset: Option<PresetArg>,
}

impl PeriodArgs {
    fn preset(&self) -> Option<Preset> {
        self.preset.map(Preset::from)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Reshape a trace into a GCxGC heatmap and export it
    Convert {
        /// Input trace file (CSV with three header rows)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (JSON file, or directory for CSV tables)
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum)]
        format: Option<FormatArg>,

        #[command(flatten)]
        period: PeriodArgs,

        /// Enhancement power (1-100); the heatmap shows x^(1/power)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
        power: Option<u8>,

        /// First-dimension time of the extracted 2D chromatogram (minutes)
        #[arg(short = 's', long, value_name = "MINUTES")]
        slice_time: Option<f64>,

        /// Heatmap colorscale hint
        #[arg(long)]
        colorscale: Option<Colorscale>,

        /// Disable the heatmap smoothing hint
        #[arg(long)]
        no_smoothing: bool,

        /// Treatment of negative values during enhancement
        #[arg(long, value_enum)]
        negative_policy: Option<NegativePolicyArg>,

        /// Include the unenhanced matrix in the JSON bundle
        #[arg(long)]
        include_raw: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Generate a synthetic GCxGC trace for testing
    Demo {
        /// Output trace file path
        #[arg(value_name = "OUTPUT", default_value = "demo_gcxgc_trace.csv")]
        output: PathBuf,

        /// Example dataset whose modulation period is simulated
        #[arg(short = 'p', long, value_enum, default_value = "gasoline")]
        preset: PresetArg,
    },

    /// Display acquisition parameters of a trace
    Info {
        /// Input trace file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Check a trace and modulation period for reshaping problems
    Validate {
        /// Input trace file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        period: PeriodArgs,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            period,
            power,
            slice_time,
            colorscale,
            no_smoothing,
            negative_policy,
            include_raw,
            config,
        } => convert::run(convert::ConvertArgs {
            input,
            output,
            format: format.map(ExportFormat::from),
            modulation_period: period.modulation_period,
            preset: period.preset(),
            power,
            slice_time,
            colorscale,
            no_smoothing,
            negative_policy: negative_policy.map(NegativePolicy::from),
            include_raw,
            config,
        }),
        Commands::Demo { output, preset } => demo::run(output, Preset::from(preset)),
        Commands::Info { file, period } => {
            info::run(file, period.modulation_period, period.preset())
        }
        Commands::Validate { file, period } => {
            validate::run(file, period.modulation_period, period.preset())
        }
    }
}
