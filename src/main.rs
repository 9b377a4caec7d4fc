//! # ImagCDF Tool
//!
//! A command-line tool for inspecting, validating and naming INTERMAGNET
//! ImagCDF files.
//!
//! ## Usage
//!
//! ```bash
//! # Show metadata and channels
//! imagcdf info esk_20240101_pt1m_4.cdf
//!
//! # Check a file against the ImagCDF schema
//! imagcdf validate esk_20240101_pt1m_4.cdf
//!
//! # Conventional file name for one day of minute data
//! imagcdf filename --station ESK --start 2024-01-01 --cadence minute --level 4 --lowercase
//! ```

use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
