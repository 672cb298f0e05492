//! Sort command - print versions in precedence order.

use anyhow::{Context, Result};
use clap::Args;

use verona_core::{Dialect, Version, VersionParser};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Version strings to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

/// Parse and sort versions, failing on the first unparseable one
pub fn sort_versions(texts: &[String], dialect: Dialect, reverse: bool) -> Result<Vec<Version>> {
    let mut versions = texts
        .iter()
        .map(|text| {
            VersionParser::parse_with(dialect, text)
                .with_context(|| format!("Failed to parse version using the {} dialect", dialect))
        })
        .collect::<Result<Vec<_>>>()?;

    versions.sort();
    if reverse {
        versions.reverse();
    }
    Ok(versions)
}

pub fn execute(args: SortArgs, dialect: Dialect) -> Result<i32> {
    for version in sort_versions(&args.versions, dialect, args.reverse)? {
        println!("{}", version);
    }
    Ok(0)
}
