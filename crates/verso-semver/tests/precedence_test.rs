/// Order-law tests for the version comparator
///
/// These tests check that comparison behaves as a total order over a
/// mixed sample of release, pre-release and build versions.

use std::cmp::Ordering;

use verso_semver::{Comparator, Element, FormatError, Semver, Version};

const SAMPLE: &[&str] = &[
    "0.0.0",
    "0.0.1-alpha",
    "0.9.9",
    "1.0.0-0",
    "1.0.0-0.3.7",
    "1.0.0-1",
    "1.0.0-alpha",
    "1.0.0-alpha.1",
    "1.0.0-alpha.beta",
    "1.0.0-beta",
    "1.0.0-beta.2",
    "1.0.0-beta.11",
    "1.0.0-rc1",
    "1.0.0-rc.1",
    "1.0.0-rc.2",
    "1.0.0-rc.1+build.1",
    "1.0.0-x.7.z.92",
    "1.0.0",
    "01.0.0",
    "1.0.0+0",
    "1.0.0+buildId",
    "1.0.0+build.1.0",
    "1.0.0+exp.sha.5114f85",
    "1.0.1",
    "1.10.0",
    "2.0.0-rc.1+20130313144700",
    "2.0.0",
];

fn sample() -> Vec<Version> {
    SAMPLE.iter().map(|s| Version::parse(s).unwrap()).collect()
}

#[test]
fn test_antisymmetry() {
    let versions = sample();
    for a in &versions {
        for b in &versions {
            assert_eq!(
                Comparator::compare(a, b),
                Comparator::compare(b, a).reverse(),
                "{} vs {}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_totality_matches_operators() {
    let versions = sample();
    for a in &versions {
        for b in &versions {
            let holds = [a < b, a == b, a > b];
            assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{} vs {}", a, b);
        }
    }
}

#[test]
fn test_transitivity() {
    let versions = sample();
    for a in &versions {
        for b in &versions {
            for c in &versions {
                if a <= b && b <= c {
                    assert!(a <= c, "{} <= {} <= {}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn test_sorted_sample_is_consistent() {
    let mut versions = sample();
    versions.sort();
    for pair in versions.windows(2) {
        assert_ne!(Comparator::compare(&pair[0], &pair[1]), Ordering::Greater);
    }
    assert_eq!(versions.first().unwrap().to_string(), "0.0.0");
    assert_eq!(versions.last().unwrap().to_string(), "2.0.0");
}

#[test]
fn test_numeric_element_always_lower() {
    let numeric = Element::from(u64::MAX);
    for s in ["a", "Z", "rc1", "1a", "0a"] {
        let alpha = Element::parse(s).unwrap();
        assert!(!alpha.is_numeric());
        assert_eq!(Element::compare(&numeric, &alpha), Ordering::Less);
        assert_eq!(Element::compare(&alpha, &numeric), Ordering::Greater);
    }
}

#[test]
fn test_round_trip() {
    for s in SAMPLE {
        let parsed = Version::parse(s).unwrap();
        let reparsed = Version::parse(&parsed.to_string()).unwrap();
        assert_eq!(parsed.major(), reparsed.major());
        assert_eq!(parsed.minor(), reparsed.minor());
        assert_eq!(parsed.patch(), reparsed.patch());
        assert_eq!(parsed.pre_release(), reparsed.pre_release());
        assert_eq!(parsed.build(), reparsed.build());
    }
}

#[test]
fn test_literal_cases() {
    let v = Semver::parse("1.0.0").unwrap();
    assert_eq!((v.major(), v.minor(), v.patch()), (1, 0, 0));
    assert!(v.pre_release().is_none());
    assert!(v.build().is_none());

    assert_eq!(
        Semver::parse("1.0.0-rc.1").unwrap().pre_release(),
        Some(&[Element::parse("rc").unwrap(), Element::from(1)][..])
    );
    assert_eq!(
        Semver::parse("1.0.0-rc.1+build.1.0").unwrap().build(),
        Some(&[Element::parse("build").unwrap(), Element::from(1), Element::from(0)][..])
    );

    assert_eq!(Semver::compare("1.0.0", "1.0.1"), Ok(Ordering::Less));
    assert_eq!(Semver::compare("1.0.0-rc1", "1.0.0"), Ok(Ordering::Less));
    assert_eq!(Semver::compare("1.0.0+buildId", "1.0.0"), Ok(Ordering::Greater));
    assert_eq!(Semver::compare("1.0.0-rc.1", "1.0.0-rc.2"), Ok(Ordering::Less));

    assert_eq!(
        Semver::parse("not a version").unwrap_err(),
        FormatError::InvalidVersion("not a version".to_string())
    );
}
