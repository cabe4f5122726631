//! Check workflow orchestration
//!
//! Runs the whole pipeline from file paths to a pass/fail decision, kept
//! apart from CLI argument parsing so it can be driven programmatically.

use tracing::info;

use crate::chart;
use crate::document::load_document;
use crate::domain::ChartVersion;
use crate::error::Result;
use crate::gate::check_advances;
use crate::index::{max_version, IndexDocument};

/// Arguments for the check workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckArgs {
    /// Entry name to look up in the index
    pub app_name: String,

    /// Path to the candidate chart descriptor
    pub chart_path: String,

    /// Path to the package index descriptor
    pub index_path: String,
}

/// Result of a passing check
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub app_name: String,

    /// Version declared by the candidate chart
    pub candidate: ChartVersion,

    /// Highest version already published
    pub latest: ChartVersion,

    /// Number of published versions considered
    pub published: usize,
}

/// Main check workflow
///
/// 1. Load the chart and extract its version
/// 2. Load the index and resolve the latest published version
/// 3. Require the chart version to be strictly greater
///
/// # Returns
///
/// The outcome on success, or the first error encountered. A version that
/// does not advance is reported as `ChartCheckError::GateFailure`.
pub fn run_check(args: &CheckArgs) -> Result<CheckOutcome> {
    let chart_doc = load_document(&args.chart_path)?;
    let candidate = chart::extract_version(&chart_doc)?;
    info!(chart = %args.chart_path, version = %candidate, "candidate chart loaded");

    let index_doc = load_document(&args.index_path)?;
    let index = IndexDocument::from_value(&index_doc)?;
    let versions = index.versions(&args.app_name)?;
    let published = versions.len();
    let latest = max_version(versions)?;
    info!(
        index = %args.index_path,
        app = %args.app_name,
        latest = %latest,
        "latest published version resolved"
    );

    check_advances(&candidate, &latest)?;

    Ok(CheckOutcome {
        app_name: args.app_name.clone(),
        candidate,
        latest,
        published,
    })
}
