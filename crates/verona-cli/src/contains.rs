//! Contains command - check versions against a range.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use verona_core::{Dialect, VersionParser, VersionRange};

#[derive(Args, Debug)]
pub struct ContainsArgs {
    /// Lower bound of the range
    #[arg(long)]
    pub lower: String,

    /// Upper bound of the range
    #[arg(long)]
    pub upper: String,

    /// Exclude the lower bound from the range
    #[arg(long)]
    pub lower_exclusive: bool,

    /// Exclude the upper bound from the range
    #[arg(long)]
    pub upper_exclusive: bool,

    /// Versions to check
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

/// Build the range described by the arguments
pub fn build_range(args: &ContainsArgs, dialect: Dialect) -> Result<VersionRange> {
    let lower = VersionParser::parse_with(dialect, &args.lower).context("Failed to parse lower bound")?;
    let upper = VersionParser::parse_with(dialect, &args.upper).context("Failed to parse upper bound")?;
    let range = VersionRange::new(lower, !args.lower_exclusive, upper, !args.upper_exclusive)?;
    Ok(range)
}

pub fn execute(args: ContainsArgs, dialect: Dialect) -> Result<i32> {
    let range = build_range(&args, dialect)?;
    log::info!("Checking {} version(s) against {}", args.versions.len(), range);
    if range.is_empty() {
        log::warn!("Range {} is empty", range);
    }

    println!("{}", range);
    let mut all_inside = true;

    for text in &args.versions {
        let version = VersionParser::parse_with(dialect, text)
            .with_context(|| format!("Failed to parse version using the {} dialect", dialect))?;

        if range.contains(&version) {
            println!("  {} {}", style("inside ").green(), version);
        } else {
            println!("  {} {}", style("outside").yellow(), version);
            all_inside = false;
        }
    }

    Ok(if all_inside { 0 } else { 1 })
}
