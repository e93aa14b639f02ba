//! Parse command - shows the components of a version.

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use verso_semver::{Element, Version};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version to parse
    #[arg(value_name = "VERSION")]
    pub version: String,

    /// Print the attribute mapping as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ParseArgs) -> Result<i32> {
    println!("{}", render(&args)?);
    Ok(0)
}

fn render(args: &ParseArgs) -> Result<String> {
    let version = Version::parse(&args.version).with_context(|| format!("Failed to parse \"{}\"", args.version))?;

    if args.json {
        return serde_json::to_string_pretty(&version.to_attributes()).context("Failed to serialize version");
    }

    let lines = [
        format!("{} {}", style("version:").cyan(), version),
        format!("{} {}", style("major:").cyan(), version.major()),
        format!("{} {}", style("minor:").cyan(), version.minor()),
        format!("{} {}", style("patch:").cyan(), version.patch()),
        format!("{} {}", style("pre-release:").cyan(), describe(version.pre_release())),
        format!("{} {}", style("build:").cyan(), describe(version.build())),
    ];
    Ok(lines.join("\n"))
}

fn describe(elements: Option<&[Element]>) -> String {
    match elements {
        None => "(none)".to_string(),
        Some(elements) => elements
            .iter()
            .map(|e| match e {
                Element::Numeric(n) => n.to_string(),
                Element::Alphanumeric(s) => format!("\"{}\"", s),
            })
            .collect::<Vec<_>>()
            .join(", "),
    }
}
