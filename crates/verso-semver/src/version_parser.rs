//! Version string parsing and validation

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::element::Element;
use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid version string \"{0}\"")]
    InvalidVersion(String),
    #[error("Invalid version string \"{input}\": \"{core}\" is not of the form MAJOR.MINOR.PATCH")]
    InvalidNumericCore { input: String, core: String },
    #[error("Invalid {field} \"{value}\": expected a non-negative integer")]
    InvalidNumericField { field: &'static str, value: String },
    #[error("Invalid {field} identifier \"{value}\"")]
    InvalidIdentifier { field: &'static str, value: String },
    #[error("Invalid version string \"{input}\": number \"{value}\" is out of range")]
    NumberOutOfRange { input: String, value: String },
}

lazy_static! {
    /// One segment: alphanumerics and dots, never ending in a dot
    static ref SEGMENT: &'static str = r"[0-9A-Za-z.]*[0-9A-Za-z]";

    // Whole version string; pre-release may chain `-` segments, build may chain `+` segments
    static ref VERSION_RE: Regex = Regex::new(&format!(
        r"^(?P<core>{seg})(?:-(?P<pre>{seg}(?:-{seg})*))?(?:\+(?P<build>{seg}(?:\+{seg})*))?$",
        seg = *SEGMENT
    )).unwrap();

    static ref NUMERIC_CORE_RE: Regex = Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").unwrap();

    static ref NUMERIC_FIELD_RE: Regex = Regex::new(r"^[0-9]+$").unwrap();

    static ref PRE_RELEASE_RE: Regex = Regex::new(&format!(r"^{seg}(?:-{seg})*$", seg = *SEGMENT)).unwrap();

    static ref BUILD_RE: Regex = Regex::new(&format!(r"^{seg}(?:\+{seg})*$", seg = *SEGMENT)).unwrap();
}

/// Parser for semantic version strings and structured version fields
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    pub fn new() -> Self {
        VersionParser
    }

    /// Parse `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
    ///
    /// Leading zeros in the numeric core are accepted and dropped.
    pub fn parse(&self, input: &str) -> Result<Version, FormatError> {
        let caps = VERSION_RE.captures(input).ok_or_else(|| {
            log::debug!("Rejected \"{}\": does not match the version grammar", input);
            FormatError::InvalidVersion(input.to_string())
        })?;

        let core = &caps["core"];
        let numbers = NUMERIC_CORE_RE.captures(core).ok_or_else(|| {
            log::debug!("Rejected \"{}\": bad numeric core \"{}\"", input, core);
            FormatError::InvalidNumericCore {
                input: input.to_string(),
                core: core.to_string(),
            }
        })?;

        build_version(
            input,
            [&numbers[1], &numbers[2], &numbers[3]],
            caps.name("pre").map(|m| m.as_str()),
            caps.name("build").map(|m| m.as_str()),
        )
    }

    /// Build a version from separately supplied fields.
    ///
    /// Each core field must be a run of digits; the optional identifiers use
    /// the same syntax as the text after `-` and `+` in a version string.
    pub fn parse_parts(
        &self,
        major: &str,
        minor: &str,
        patch: &str,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Version, FormatError> {
        for (field, value) in [("major", major), ("minor", minor), ("patch", patch)] {
            if !NUMERIC_FIELD_RE.is_match(value) {
                log::debug!("Rejected {} field \"{}\"", field, value);
                return Err(FormatError::InvalidNumericField {
                    field,
                    value: value.to_string(),
                });
            }
        }

        if let Some(pre) = pre_release {
            if !PRE_RELEASE_RE.is_match(pre) {
                return Err(FormatError::InvalidIdentifier {
                    field: "pre-release",
                    value: pre.to_string(),
                });
            }
        }

        if let Some(build) = build {
            if !BUILD_RE.is_match(build) {
                return Err(FormatError::InvalidIdentifier {
                    field: "build",
                    value: build.to_string(),
                });
            }
        }

        let mut input = format!("{}.{}.{}", major, minor, patch);
        if let Some(pre) = pre_release {
            input.push('-');
            input.push_str(pre);
        }
        if let Some(build) = build {
            input.push('+');
            input.push_str(build);
        }

        build_version(&input, [major, minor, patch], pre_release, build)
    }
}

/// Shared conversion step for both entry points. Inputs are already validated;
/// `input` is the full text reported if a number overflows.
fn build_version(
    input: &str,
    core: [&str; 3],
    pre_release: Option<&str>,
    build: Option<&str>,
) -> Result<Version, FormatError> {
    let convert = || -> Result<Version, FormatError> {
        let [major, minor, patch] = core.map(parse_number);
        let pre_release = pre_release.map(Element::parse_list).transpose()?;
        let build = build.map(Element::parse_list).transpose()?;
        Ok(Version::new(major?, minor?, patch?, pre_release, build))
    };

    convert().map_err(|e| match e {
        FormatError::NumberOutOfRange { value, .. } => {
            log::debug!("Rejected \"{}\": number \"{}\" is out of range", input, value);
            FormatError::NumberOutOfRange {
                input: input.to_string(),
                value,
            }
        }
        other => other,
    })
}

fn parse_number(digits: &str) -> Result<u64, FormatError> {
    digits.parse::<u64>().map_err(|_| FormatError::NumberOutOfRange {
        input: digits.to_string(),
        value: digits.to_string(),
    })
}
