//! Structured version attributes
//!
//! Readers for JSON, XML or similar formats deserialize into
//! [`VersionAttributes`] and hand it to [`VersionAttributes::into_version`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::version::Version;
use crate::version_parser::{FormatError, VersionParser};

/// A major/minor/patch value as it appears in structured data
///
/// Every form is rendered as text and checked by the same rules as string
/// input, so a number too large for `u64` fails with
/// [`FormatError::NumberOutOfRange`] whether it was written as a string or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Integer(u64),
    /// Only reachable for negative input, which validation rejects
    Signed(i64),
    /// Numbers beyond `i64`/`u64` or with a fraction
    Float(f64),
    Text(String),
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Integer(n) => write!(f, "{}", n),
            NumericField::Signed(n) => write!(f, "{}", n),
            NumericField::Float(n) => write!(f, "{}", n),
            NumericField::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for NumericField {
    fn from(value: u64) -> Self {
        NumericField::Integer(value)
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// Attribute mapping with keys `major`, `minor`, `patch`, `preReleaseId`, `buildId`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionAttributes {
    pub major: NumericField,
    pub minor: NumericField,
    pub patch: NumericField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_release_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,
}

impl VersionAttributes {
    /// Validate the attributes and build a version from them.
    pub fn into_version(self) -> Result<Version, FormatError> {
        VersionParser::new().parse_parts(
            &self.major.to_string(),
            &self.minor.to_string(),
            &self.patch.to_string(),
            self.pre_release_id.as_deref(),
            self.build_id.as_deref(),
        )
    }
}

impl TryFrom<VersionAttributes> for Version {
    type Error = FormatError;

    fn try_from(attributes: VersionAttributes) -> Result<Self, Self::Error> {
        attributes.into_version()
    }
}

impl From<&Version> for VersionAttributes {
    fn from(version: &Version) -> Self {
        version.to_attributes()
    }
}
