//! Semver facade providing high-level version operations on strings

use std::cmp::Ordering;

use crate::{Comparator, FormatError, Version, VersionParser};

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Parse a version string
    pub fn parse(version: &str) -> Result<Version, FormatError> {
        VersionParser::new().parse(version)
    }

    /// Compare two version strings using the total order
    pub fn compare(version1: &str, version2: &str) -> Result<Ordering, FormatError> {
        let parser = VersionParser::new();
        Ok(Comparator::compare(&parser.parse(version1)?, &parser.parse(version2)?))
    }

    /// Check that a string is a valid version
    pub fn is_valid(version: &str) -> bool {
        VersionParser::new().parse(version).is_ok()
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let parser = VersionParser::new();

        // Parse versions, keeping the original index; invalid ones are dropped
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| match parser.parse(v) {
                Ok(version) => Some((version, i)),
                Err(e) => {
                    log::warn!("Skipping unsortable version: {}", e);
                    None
                }
            })
            .collect();

        // Stable sort, so equal versions keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
