//! # gcxgc
//!
//! A command-line tool for turning 1D GC detector traces into GCxGC heatmaps.
//!
//! ## Usage
//!
//! ```bash
//! # Reshape a trace with the gasoline modulation period and export JSON
//! gcxgc convert run.csv --preset gasoline -o run.json
//!
//! # Export CSV tables with an explicit period
//! gcxgc convert run.csv --modulation-period 4.0 --format csv -o run_tables
//!
//! # Check a trace for reshaping problems
//! gcxgc validate run.csv --modulation-period 4.0
//!
//! # Generate demo data
//! gcxgc demo demo.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

use cli::{dispatch, init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity());
    dispatch(cli)
}
