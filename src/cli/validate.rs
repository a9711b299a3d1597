use anyhow::Result;
use log::info;
use std::path::PathBuf;

use gcxgc::preset::{ModulationPeriod, Preset};
use gcxgc::trace::RawTrace;
use gcxgc::validator::validate_trace;

/// Validate a trace against a modulation period
pub fn run(file: PathBuf, modulation_period: Option<f64>, preset: Option<Preset>) -> Result<()> {
    let period = ModulationPeriod::resolve(modulation_period, preset)?;

    info!("gcxgc Validator");
    info!("===============");
    info!("File: {}", file.display());
    info!("Modulation period: {} s", period.seconds());

    let trace = match RawTrace::from_csv_file(&file) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Validation error: {}", e);
            std::process::exit(1);
        }
    };

    let report = validate_trace(&trace, period.seconds(), file.display().to_string());

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
