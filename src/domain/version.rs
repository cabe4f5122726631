use crate::error::{ChartCheckError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Semantic version of a chart or a published index record.
///
/// Ordering and equality follow semantic-versioning precedence: pre-release
/// identifiers are compared, build metadata is ignored. `1.0.0+a` and
/// `1.0.0+b` are therefore equal.
#[derive(Debug, Clone)]
pub struct ChartVersion(semver::Version);

impl ChartVersion {
    /// Create a release version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        ChartVersion(semver::Version::new(major, minor, patch))
    }

    /// Parse a version string (e.g., "1.2.3", "v1.2.3-rc.1+build.5")
    pub fn parse(raw: &str) -> Result<Self> {
        let clean = raw
            .strip_prefix('v')
            .or_else(|| raw.strip_prefix('V'))
            .unwrap_or(raw);

        semver::Version::parse(clean)
            .map(ChartVersion)
            .map_err(|e| {
                ChartCheckError::schema(format!("Invalid semantic version '{}': {}", raw, e))
            })
    }

    pub fn as_semver(&self) -> &semver::Version {
        &self.0
    }
}

impl FromStr for ChartVersion {
    type Err = ChartCheckError;

    fn from_str(s: &str) -> Result<Self> {
        ChartVersion::parse(s)
    }
}

impl PartialEq for ChartVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ChartVersion {}

impl PartialOrd for ChartVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChartVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp_precedence(&other.0)
    }
}

impl fmt::Display for ChartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: &str) -> ChartVersion {
        ChartVersion::parse(raw).unwrap()
    }

    #[test]
    fn test_version_parse() {
        let version = v("1.2.3");
        assert_eq!(version.as_semver().major, 1);
        assert_eq!(version.as_semver().minor, 2);
        assert_eq!(version.as_semver().patch, 3);
    }

    #[test]
    fn test_version_parse_with_prefix() {
        assert_eq!(v("v1.2.3"), ChartVersion::new(1, 2, 3));
        assert_eq!(v("V1.2.3"), ChartVersion::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(ChartVersion::parse("1.2").is_err());
        assert!(ChartVersion::parse("1.2.3.4").is_err());
        assert!(ChartVersion::parse("latest").is_err());
        assert!(ChartVersion::parse("").is_err());
    }

    #[test]
    fn test_version_parse_rejects_surrounding_whitespace() {
        assert!(ChartVersion::parse(" 1.2.3").is_err());
        assert!(ChartVersion::parse("1.2.3 ").is_err());
        assert!(ChartVersion::parse("v 1.2.3").is_err());
    }

    #[test]
    fn test_invalid_version_error_names_input() {
        let err = ChartVersion::parse("one.two.three").unwrap_err();
        assert!(err.to_string().contains("'one.two.three'"));
    }

    #[test]
    fn test_numeric_ordering() {
        assert!(v("1.2.9") < v("1.3.0"));
        assert!(v("1.10.0") > v("1.9.0"));
        assert!(v("2.0.0") > v("1.99.99"));
    }

    #[test]
    fn test_prerelease_precedes_release() {
        assert!(v("1.0.0-alpha") < v("1.0.0"));
        assert!(v("1.0.0-rc.1") < v("1.0.0"));
    }

    #[test]
    fn test_prerelease_precedence_chain() {
        let chain = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in chain.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert_eq!(v("1.0.0+build.1"), v("1.0.0+build.2"));
        assert_eq!(v("1.0.0+build.1"), v("1.0.0"));
        assert!(!(v("1.0.0+zzz") > v("1.0.0")));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(v("v1.2.3-rc.1+b5").to_string(), "1.2.3-rc.1+b5");
        assert_eq!(ChartVersion::new(1, 2, 3).to_string(), "1.2.3");
    }
}
