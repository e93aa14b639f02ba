//! Sort command - orders a list of versions.

use anyhow::Result;
use clap::Args;

use verso_semver::Semver;

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort
    #[arg(value_name = "VERSIONS", required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

pub fn execute(args: SortArgs) -> Result<i32> {
    for version in sort(&args) {
        println!("{}", version);
    }
    Ok(0)
}

/// Invalid versions are dropped; the facade logs a warning for each.
fn sort(args: &SortArgs) -> Vec<String> {
    let versions: Vec<&str> = args.versions.iter().map(String::as_str).collect();
    if args.reverse {
        Semver::rsort(&versions)
    } else {
        Semver::sort(&versions)
    }
}
