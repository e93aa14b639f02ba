//! Semantic Versioning 2.0.0 parsing and comparison
//!
//! This crate parses `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` strings into
//! immutable [`Version`] values and orders them with a strict total order:
//! SemVer precedence first, then build metadata as a tie-breaker.

mod attributes;
mod comparator;
mod element;
mod semver;
mod version;
mod version_parser;

pub use attributes::{NumericField, VersionAttributes};
pub use comparator::{Comparator, NullPriority};
pub use element::Element;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{FormatError, VersionParser};
