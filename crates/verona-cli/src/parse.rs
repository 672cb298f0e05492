//! Parse command - print the canonical form of version strings.

use anyhow::Result;
use clap::Args;
use console::style;

use verona_core::{Dialect, VersionParser};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version strings to parse
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,
}

pub fn execute(args: ParseArgs, dialect: Dialect) -> Result<i32> {
    let mut failed = false;

    for text in &args.versions {
        match VersionParser::parse_with(dialect, text) {
            Ok(version) => {
                log::debug!("Parsed '{}' as {:?}", text, version);
                println!("{}", version);
            }
            Err(e) => {
                eprintln!("{} {}", style("Error:").red().bold(), e);
                failed = true;
            }
        }
    }

    Ok(if failed { i32::from(crate::ERROR_EXIT_CODE) } else { 0 })
}
