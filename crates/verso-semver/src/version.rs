//! Parsed semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::attributes::{NumericField, VersionAttributes};
use crate::comparator::Comparator;
use crate::element::Element;
use crate::version_parser::{FormatError, VersionParser};

/// An immutable semantic version.
///
/// Equality and ordering follow [`Comparator::compare`], so two versions with
/// different build metadata are not equal.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<Vec<Element>>,
    build: Option<Vec<Element>>,
}

impl Version {
    pub(crate) fn new(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<Vec<Element>>,
        build: Option<Vec<Element>>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            pre_release,
            build,
        }
    }

    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        VersionParser::new().parse(input)
    }

    /// Build a version from structured fields, see [`VersionParser::parse_parts`]
    pub fn from_parts(
        major: &str,
        minor: &str,
        patch: &str,
        pre_release: Option<&str>,
        build: Option<&str>,
    ) -> Result<Self, FormatError> {
        VersionParser::new().parse_parts(major, minor, patch, pre_release, build)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Pre-release elements, `None` for a release version
    pub fn pre_release(&self) -> Option<&[Element]> {
        self.pre_release.as_deref()
    }

    /// Build metadata elements, `None` when absent
    pub fn build(&self) -> Option<&[Element]> {
        self.build.as_deref()
    }

    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// The minimal attribute mapping for this version
    pub fn to_attributes(&self) -> VersionAttributes {
        VersionAttributes {
            major: NumericField::Integer(self.major),
            minor: NumericField::Integer(self.minor),
            patch: NumericField::Integer(self.patch),
            pre_release_id: self.pre_release.as_deref().map(join_elements),
            build_id: self.build.as_deref().map(join_elements),
        }
    }
}

fn join_elements(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre) = &self.pre_release {
            write!(f, "-{}", join_elements(pre))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", join_elements(build))?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = FormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Version::parse(value)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::compare(self, other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

// Versions compare equal exactly when every field is equal, so hashing
// the fields agrees with `Eq`.
impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.pre_release.hash(state);
        self.build.hash(state);
    }
}
