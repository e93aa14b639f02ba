//! From-json command - builds a version from an attribute mapping.

use anyhow::{Context, Result};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;

use verso_semver::VersionAttributes;

#[derive(Args, Debug)]
pub struct FromJsonArgs {
    /// JSON file holding the mapping (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

pub fn execute(args: FromJsonArgs) -> Result<i32> {
    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    println!("{}", convert(&content)?);
    Ok(0)
}

fn convert(content: &str) -> Result<String> {
    let attributes: VersionAttributes = serde_json::from_str(content).context("Failed to parse version attributes")?;
    log::debug!("Attributes: {:?}", attributes);

    let version = attributes.into_version().context("Invalid version attributes")?;
    Ok(version.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_convert() {
        let out = convert(r#"{"major": "1", "minor": 0, "patch": 0, "preReleaseId": "rc.1", "buildId": "build.1.0"}"#)
            .unwrap();
        assert_eq!(out, "1.0.0-rc.1+build.1.0");
    }

    #[test]
    fn test_convert_invalid() {
        let err = convert(r#"{"major": "x", "minor": 0, "patch": 0}"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid version attributes");

        let err = convert("not json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse version attributes");
    }

    #[test]
    fn test_execute_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.json");
        fs::write(&path, r#"{"major": 3, "minor": 2, "patch": 1}"#).unwrap();

        let code = execute(FromJsonArgs { file: Some(path) }).unwrap();
        assert_eq!(code, 0);

        let missing = dir.path().join("missing.json");
        assert!(execute(FromJsonArgs { file: Some(missing) }).is_err());
    }
}
