//! Build pipeline
//!
//! Sequences a build: bundle, rewrite every emitted unit, remove intermediate
//! artifacts. A bundler failure stops the pipeline before anything is
//! rewritten or removed, and the bundler's error is returned unchanged.

use std::path::PathBuf;

use log::{error, info};

use crate::assembler::BundleConfiguration;
use crate::bundler::{BuildReport, Bundler};
use crate::error::Result;
use crate::rewriter::{self, RewriteOutcome};

/// Result of the post-bundle steps
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub outcomes: Vec<(String, RewriteOutcome)>,
    pub removed: Vec<PathBuf>,
}

/// Result of a full build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub report: BuildReport,
    pub rewrite: RewriteSummary,
}

/// Rewrite emitted units and remove artifacts
pub fn rewrite(config: &BundleConfiguration, artifacts: &[String]) -> Result<RewriteSummary> {
    let outcomes = rewriter::rewrite_units(&config.out_dir, &config.modules)?;
    let removed = rewriter::remove_artifacts(&config.out_dir, artifacts)?;
    Ok(RewriteSummary { outcomes, removed })
}

/// Run the bundler, then the post-bundle steps
pub fn build(
    config: &BundleConfiguration,
    bundler: &dyn Bundler,
    artifacts: &[String],
) -> Result<BuildSummary> {
    info!(
        "Bundling {} unit(s) into {}",
        config.modules.len(),
        config.out_dir.display()
    );

    let report = bundler.bundle(config).inspect_err(|e| {
        error!("Bundler reported failure, skipping rewrite and cleanup: {e}");
    })?;

    let rewrite = rewrite(config, artifacts)?;
    Ok(BuildSummary { report, rewrite })
}
