//! geoplaces — builds the city/timezone picker dataset
//!
//! - Build and write the JSON document (default `src/utils/geonames.json`)
//!   $ geoplaces build
//!   $ geoplaces build --output public/geonames.json
//!
//! - Only print the feature-code reports
//!   $ geoplaces report
//!
//! Nothing is written unless every download and the transform succeed.
mod args;
mod logging;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use geoplaces_core::prelude::*;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    logging::init_logger(args.log_level).context("failed to initialize logger")?;

    let sources = fetch().context("fetching sources")?;
    let build = sources.build().context("building dataset")?;

    match args.command {
        Commands::Build { output } => {
            print_histogram(
                "Selected places by feature code",
                &feature_histogram(build.selected.iter().copied()),
            );
            write_json(&output, &build.dataset)
                .with_context(|| format!("writing {}", output.display()))?;
            println!("{} of {}", build.stats.places, build.stats.filtered);
            println!("Wrote {}", output.display());
        }

        Commands::Report => {
            print_histogram(
                &format!("Source feature codes (population >= {MIN_POPULATION})"),
                &source_histogram(build.sorted.iter().copied()),
            );
            println!();
            print_histogram(
                "Selected places by feature code",
                &feature_histogram(build.selected.iter().copied()),
            );
            let stats = build.stats;
            println!();
            println!("Cities:    {}", stats.cities);
            println!("Filtered:  {}", stats.filtered);
            println!("Places:    {}", stats.places);
            println!("Countries: {}", stats.countries);
            println!("Timezones: {}", stats.timezones);
            println!("Legacy:    {}", build.dataset.legacy.len());
        }
    }

    Ok(())
}

#[cfg(feature = "fetch")]
fn fetch() -> anyhow::Result<Sources> {
    Ok(geoplaces_core::loader::fetch_sources()?)
}

#[cfg(not(feature = "fetch"))]
fn fetch() -> anyhow::Result<Sources> {
    anyhow::bail!("geoplaces was built without the 'fetch' feature")
}
