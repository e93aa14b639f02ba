//! Compare command - prints the ordering of two versions.

use anyhow::{Context, Result};
use clap::Args;
use std::cmp::Ordering;

use verso_semver::{Comparator, Version};

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    #[arg(value_name = "A")]
    pub left: String,

    /// Right-hand version
    #[arg(value_name = "B")]
    pub right: String,

    /// Ignore build metadata (SemVer precedence only)
    #[arg(long)]
    pub ignore_build: bool,
}

pub fn execute(args: CompareArgs) -> Result<i32> {
    let ordering = compare(&args)?;
    println!("{}", symbol(ordering));
    Ok(0)
}

fn compare(args: &CompareArgs) -> Result<Ordering> {
    let left = Version::parse(&args.left).with_context(|| format!("Failed to parse \"{}\"", args.left))?;
    let right = Version::parse(&args.right).with_context(|| format!("Failed to parse \"{}\"", args.right))?;

    Ok(if args.ignore_build {
        Comparator::compare_precedence(&left, &right)
    } else {
        Comparator::compare(&left, &right)
    })
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(left: &str, right: &str, ignore_build: bool) -> CompareArgs {
        CompareArgs {
            left: left.to_string(),
            right: right.to_string(),
            ignore_build,
        }
    }

    #[test]
    fn test_compare() {
        assert_eq!(symbol(compare(&args("1.0.0", "1.0.1", false)).unwrap()), "<");
        assert_eq!(symbol(compare(&args("1.0.0", "1.0.0", false)).unwrap()), "=");
        assert_eq!(symbol(compare(&args("1.0.0+b", "1.0.0", false)).unwrap()), ">");
    }

    #[test]
    fn test_compare_ignore_build() {
        assert_eq!(compare(&args("1.0.0+b", "1.0.0", true)).unwrap(), Ordering::Equal);
        assert_eq!(compare(&args("1.0.0-rc+b", "1.0.0", true)).unwrap(), Ordering::Less);
    }

    #[test]
    fn test_compare_invalid() {
        let err = compare(&args("1.0.0", "1.0", false)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse \"1.0\"");
    }
}
