//! Version precedence comparison

use std::cmp::Ordering;

use crate::element::Element;
use crate::version::Version;

/// Where an absent identifier list sorts relative to a present one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullPriority {
    /// Absent sorts above any present list (pre-release: `1.0.0` > `1.0.0-rc`)
    Higher,
    /// Absent sorts below any present list (build: `1.0.0` < `1.0.0+b`)
    Lower,
}

/// Comparator implementing SemVer precedence plus build metadata ordering
pub struct Comparator;

impl Comparator {
    /// Total order: numeric core, then pre-release, then build metadata.
    pub fn compare(a: &Version, b: &Version) -> Ordering {
        Self::compare_precedence(a, b)
            .then_with(|| Self::compare_lists(a.build(), b.build(), NullPriority::Lower))
    }

    /// SemVer precedence only; build metadata is ignored.
    pub fn compare_precedence(a: &Version, b: &Version) -> Ordering {
        a.major()
            .cmp(&b.major())
            .then(a.minor().cmp(&b.minor()))
            .then(a.patch().cmp(&b.patch()))
            .then_with(|| Self::compare_lists(a.pre_release(), b.pre_release(), NullPriority::Higher))
    }

    /// Compare two optional identifier lists.
    ///
    /// A shorter list sorts lower than a longer one, before any element is
    /// looked at.
    pub fn compare_lists(a: Option<&[Element]>, b: Option<&[Element]>, priority: NullPriority) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match priority {
                NullPriority::Higher => Ordering::Greater,
                NullPriority::Lower => Ordering::Less,
            },
            (Some(_), None) => match priority {
                NullPriority::Higher => Ordering::Less,
                NullPriority::Lower => Ordering::Greater,
            },
            (Some(a), Some(b)) => a.len().cmp(&b.len()).then_with(|| {
                a.iter()
                    .zip(b)
                    .map(|(x, y)| Element::compare(x, y))
                    .find(|ord| ord.is_ne())
                    .unwrap_or(Ordering::Equal)
            }),
        }
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_gt()
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_ge()
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_lt()
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_le()
    }

    /// Check if version1 == version2
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_eq()
    }

    /// Check if version1 != version2
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare(version1, version2).is_ne()
    }
}
