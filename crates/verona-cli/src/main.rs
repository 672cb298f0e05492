mod compare;
mod config;
mod contains;
mod parse;
mod sort;

use config::VeronaConfig;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use verona_core::Dialect;

/// Exit code for failures, distinct from the 1 that `contains` uses for
/// versions outside the range
const ERROR_EXIT_CODE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "verona")]
#[command(about = "Parse, compare, and range-check semantic versions")]
#[command(version)]
#[command(after_help = "Exit status: 0 on success, 1 if `contains` finds a version outside the range, 2 on errors.")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Version dialect: strict, osgi, or lax (overrides verona.toml)
    #[arg(long, global = true)]
    dialect: Option<Dialect>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of each version
    Parse(parse::ParseArgs),

    /// Compare two versions by precedence
    Compare(compare::CompareArgs),

    /// Print versions in precedence order
    Sort(sort::SortArgs),

    /// Check whether versions fall inside a range
    Contains(contains::ContainsArgs),
}

/// Initialize logging; RUST_LOG takes precedence over -v flags
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = VeronaConfig::load_from_cwd()?;
    let dialect = config::resolve_dialect(args.dialect, config.as_ref())?;
    log::debug!("Using {} dialect", dialect);

    match args.command {
        Commands::Parse(parse_args) => parse::execute(parse_args, dialect),
        Commands::Compare(compare_args) => compare::execute(compare_args, dialect),
        Commands::Sort(sort_args) => sort::execute(sort_args, dialect),
        Commands::Contains(contains_args) => contains::execute(contains_args, dialect),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::from(ERROR_EXIT_CODE)
        }
    }
}
