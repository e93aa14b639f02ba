mod compare;
mod from_json;
mod parse;
mod sort;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "verso")]
#[command(about = "Parse and compare semantic versions")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the components of a version
    Parse(parse::ParseArgs),

    /// Compare two versions and print <, = or >
    Compare(compare::CompareArgs),

    /// Sort versions in ascending order
    Sort(sort::SortArgs),

    /// Build a version from a JSON attribute mapping
    FromJson(from_json::FromJsonArgs),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<i32> {
    let args = Args::parse();
    init_logging(args.verbose);
    log::debug!("{:?}", args.command);

    match args.command {
        Commands::Parse(args) => parse::execute(args),
        Commands::Compare(args) => compare::execute(args),
        Commands::Sort(args) => sort::execute(args),
        Commands::FromJson(args) => from_json::execute(args),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{} {}", console::style("Error:").red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
