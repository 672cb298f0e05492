//! Compare command - order two versions by precedence.

use anyhow::{Context, Result};
use clap::Args;
use std::cmp::Ordering;

use verona_core::{Dialect, VersionParser};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First version
    #[arg(value_name = "LEFT")]
    pub left: String,

    /// Second version
    #[arg(value_name = "RIGHT")]
    pub right: String,
}

pub fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: CompareArgs, dialect: Dialect) -> Result<i32> {
    let left = VersionParser::parse_with(dialect, &args.left)
        .with_context(|| format!("Failed to parse left version using the {} dialect", dialect))?;
    let right = VersionParser::parse_with(dialect, &args.right)
        .with_context(|| format!("Failed to parse right version using the {} dialect", dialect))?;

    println!("{} {} {}", left, symbol(left.cmp(&right)), right);
    Ok(0)
}
