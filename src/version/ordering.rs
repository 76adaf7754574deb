//! Semantic-version-like ordering of library version strings

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d+)\.(\d+)(?:\.(\d+))?(?:[.-]?(SNAPSHOT|RC\d*|M\d*|RELEASE|GA))?$")
        .expect("version pattern is valid")
});

/// Markers that make a version a pre-release
const UNSTABLE_MARKERS: &[&str] = &["SNAPSHOT", "-RC", ".RC", "-M", ".M", "ALPHA", "BETA"];

/// Release stage of a version, in ascending order of maturity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Qualifier {
    Snapshot,
    Milestone,
    ReleaseCandidate,
    Release,
}

/// A version string broken into comparable parts
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ParsedVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub qualifier: Qualifier,
    pub qualifier_number: u64,
}

impl ParsedVersion {
    /// Parses `major.minor[.patch][qualifier]`, returning `None` for anything else
    pub fn parse(version: &str) -> Option<Self> {
        let caps = VERSION.captures(version.trim())?;

        let number = |idx: usize| -> Option<u64> {
            caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
        };

        let (qualifier, qualifier_number) = match caps.get(4) {
            None => (Qualifier::Release, 0),
            Some(m) => parse_qualifier(&m.as_str().to_ascii_uppercase())?,
        };

        Some(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            qualifier,
            qualifier_number,
        })
    }
}

fn parse_qualifier(text: &str) -> Option<(Qualifier, u64)> {
    let numbered = |digits: &str| -> Option<u64> {
        if digits.is_empty() {
            Some(1)
        } else {
            digits.parse().ok()
        }
    };

    match text {
        "SNAPSHOT" => Some((Qualifier::Snapshot, 0)),
        "RELEASE" | "GA" => Some((Qualifier::Release, 0)),
        _ => {
            if let Some(digits) = text.strip_prefix("RC") {
                Some((Qualifier::ReleaseCandidate, numbered(digits)?))
            } else if let Some(digits) = text.strip_prefix('M') {
                Some((Qualifier::Milestone, numbered(digits)?))
            } else {
                None
            }
        }
    }
}

/// Compares two version strings
///
/// Parsable versions compare by `(major, minor, patch, qualifier, qualifier number)`
/// with SNAPSHOT < milestone < RC < release. Unparsable strings sort below every
/// parsable one and compare among themselves as plain strings.
///
/// # Example
///
/// ```
/// use javadoc_harvest::version::compare_versions;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_versions("1.1.0-RC1", "1.1.0"), Ordering::Less);
/// assert_eq!(compare_versions("2.0", "1.9.9"), Ordering::Greater);
/// ```
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (ParsedVersion::parse(a), ParsedVersion::parse(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

/// Returns true unless the version carries a pre-release marker
pub fn is_stable_version(version: &str) -> bool {
    let upper = version.to_ascii_uppercase();
    !UNSTABLE_MARKERS.iter().any(|marker| upper.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_version() {
        let parsed = ParsedVersion::parse("5.3.21").unwrap();
        assert_eq!((parsed.major, parsed.minor, parsed.patch), (5, 3, 21));
        assert_eq!(parsed.qualifier, Qualifier::Release);
    }

    #[test]
    fn test_parse_qualifiers() {
        let rc = ParsedVersion::parse("1.1.0-RC2").unwrap();
        assert_eq!(rc.qualifier, Qualifier::ReleaseCandidate);
        assert_eq!(rc.qualifier_number, 2);

        let milestone = ParsedVersion::parse("6.0.0.M").unwrap();
        assert_eq!(milestone.qualifier, Qualifier::Milestone);
        assert_eq!(milestone.qualifier_number, 1);

        let snapshot = ParsedVersion::parse("2.0-snapshot").unwrap();
        assert_eq!(snapshot.qualifier, Qualifier::Snapshot);

        let ga = ParsedVersion::parse("4.2.GA").unwrap();
        assert_eq!(ga.qualifier, Qualifier::Release);
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert!(ParsedVersion::parse("latest").is_none());
        assert!(ParsedVersion::parse("1").is_none());
        assert!(ParsedVersion::parse("1.0.0-beta").is_none());
    }

    #[test]
    fn test_release_candidate_before_release() {
        assert_eq!(compare_versions("1.1.0-RC1", "1.1.0"), Ordering::Less);
        assert_eq!(compare_versions("1.1.0", "1.1.0.RELEASE"), Ordering::Equal);
    }

    #[test]
    fn test_qualifier_ordering() {
        let mut versions = vec!["1.0-RC1", "1.0", "1.0-SNAPSHOT", "1.0-M2", "1.0-RC"];
        versions.sort_by(|a, b| compare_versions(a, b));
        assert_eq!(versions, vec!["1.0-SNAPSHOT", "1.0-M2", "1.0-RC", "1.0-RC1", "1.0"]);
    }

    #[test]
    fn test_numeric_components_compare_numerically() {
        assert_eq!(compare_versions("1.10.0", "1.9.0"), Ordering::Greater);
        assert_eq!(compare_versions("1.0", "1.0.0"), Ordering::Equal);
    }

    #[test]
    fn test_unparsable_sorts_below_parsable() {
        assert_eq!(compare_versions("nightly", "0.1"), Ordering::Less);
        assert_eq!(compare_versions("0.1", "nightly"), Ordering::Greater);
        assert_eq!(compare_versions("alpha", "beta"), Ordering::Less);
    }

    #[test]
    fn test_is_stable_version() {
        assert!(is_stable_version("1.1.0"));
        assert!(is_stable_version("5.3.21.RELEASE"));
        assert!(!is_stable_version("1.1.0-RC1"));
        assert!(!is_stable_version("2.0-snapshot"));
        assert!(!is_stable_version("6.0.0.M3"));
        assert!(!is_stable_version("3.0.0-beta"));
    }
}
