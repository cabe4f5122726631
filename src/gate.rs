//! Publication gate: the candidate must advance past every published version.

use tracing::debug;

use crate::domain::ChartVersion;
use crate::error::{ChartCheckError, Result};

/// Passes only when `candidate` is strictly greater than `latest`.
///
/// Equal versions (including ones differing only in build metadata) fail.
pub fn check_advances(candidate: &ChartVersion, latest: &ChartVersion) -> Result<()> {
    debug!(%candidate, %latest, "comparing versions");

    if candidate <= latest {
        return Err(ChartCheckError::gate_failure(candidate, latest));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_GATE_FAILURE;

    fn v(raw: &str) -> ChartVersion {
        ChartVersion::parse(raw).unwrap()
    }

    #[test]
    fn test_newer_candidate_passes() {
        assert!(check_advances(&v("1.4.0"), &v("1.3.0")).is_ok());
        assert!(check_advances(&v("1.3.1"), &v("1.3.0")).is_ok());
        assert!(check_advances(&v("1.3.0"), &v("1.3.0-rc.2")).is_ok());
    }

    #[test]
    fn test_equal_candidate_fails() {
        let err = check_advances(&v("1.3.0"), &v("1.3.0")).unwrap_err();
        assert_eq!(err.exit_code(), EXIT_GATE_FAILURE);
    }

    #[test]
    fn test_build_metadata_does_not_advance() {
        assert!(check_advances(&v("1.3.0+build.2"), &v("1.3.0+build.1")).is_err());
    }

    #[test]
    fn test_older_candidate_fails() {
        let err = check_advances(&v("1.2.9"), &v("1.3.0")).unwrap_err();
        assert!(matches!(err, ChartCheckError::GateFailure { .. }));
        assert!(err.to_string().contains("(1.2.9)"));
        assert!(err.to_string().contains("(1.3.0)"));
    }

    #[test]
    fn test_prerelease_of_next_version_fails_against_release() {
        assert!(check_advances(&v("1.3.0-rc.1"), &v("1.3.0")).is_err());
    }
}
