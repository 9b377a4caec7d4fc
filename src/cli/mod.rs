use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use imagcdf::container::Compression;
use imagcdf::filename::{Cadence, Coverage};
use imagcdf::schema::PublicationLevel;

mod config;
mod filename;
mod info;
mod repack;
mod validate;

/// imagcdf - INTERMAGNET ImagCDF inspection and naming tool
#[derive(Parser)]
#[command(name = "imagcdf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display the metadata and channels of an ImagCDF file
    Info {
        /// Input ImagCDF file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// List every sample next to its timestamp
        #[arg(long)]
        data: bool,
    },

    /// Validate ImagCDF file integrity and schema compliance
    Validate {
        /// Input ImagCDF file path
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the conventional file name for a dataset
    Filename {
        /// IAGA observatory code
        #[arg(long)]
        station: String,

        /// Start of the data, YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (UTC)
        #[arg(long)]
        start: String,

        /// Sample cadence (second, minute, hourly, daily, monthly, annual)
        #[arg(long)]
        cadence: Option<Cadence>,

        /// Time span covered by the file (default: daily)
        #[arg(long)]
        coverage: Option<Coverage>,

        /// Publication level (1-4)
        #[arg(long, default_value = "1")]
        level: PublicationLevel,

        /// Text prepended to the name, e.g. an output directory
        #[arg(long)]
        prefix: Option<String>,

        /// Lowercase the name (the prefix is kept as given)
        #[arg(long)]
        lowercase: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Rewrite an ImagCDF file, optionally with different compression
    Repack {
        /// Input ImagCDF file path
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output path (defaults to the conventional name next to the input)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Compression (none, rle, huff, ahuff, gzip, gzip1-gzip9)
        #[arg(short = 'c', long)]
        compression: Option<Compression>,

        /// Replace the output file if it exists
        #[arg(short, long)]
        force: bool,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
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
        Commands::Info { file, data } => info::run(file, data),
        Commands::Validate { file } => validate::run(file),
        Commands::Filename {
            station,
            start,
            cadence,
            coverage,
            level,
            prefix,
            lowercase,
            config,
        } => filename::run(station, start, cadence, coverage, level, prefix, lowercase, config),
        Commands::Repack {
            input,
            output,
            compression,
            force,
            config,
        } => repack::run(input, output, compression, force, config),
    }
}
