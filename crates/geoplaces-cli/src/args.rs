use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

/// CLI arguments for geoplaces
#[derive(Debug, Parser)]
#[command(
    name = "geoplaces",
    version,
    about = "Build the compact cities/countries/timezones dataset from GeoNames and tzdata"
)]
pub struct CliArgs {
    /// Minimum log level (off, error, warn, info, debug, trace); overrides RUST_LOG.
    /// Without either, `info` is used.
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<LevelFilter>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Download the sources, build the dataset and write it as JSON
    Build {
        /// Where to write the JSON document
        #[arg(short = 'o', long = "output", default_value = geoplaces_core::writer::DEFAULT_OUTPUT)]
        output: PathBuf,
    },

    /// Download and transform, print the feature-code reports, write nothing
    Report,
}
