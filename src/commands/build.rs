//! Build command implementation
//!
//! The build process:
//! 1. Load amdpack.yaml (or defaults) and apply directory overrides
//! 2. Scan pages and assemble the bundle configuration
//! 3. Bundle one unit per page
//! 4. Rewrite each unit's entry call and remove intermediate artifacts

use std::path::PathBuf;

use crate::assembler;
use crate::bundler::ConcatBundler;
use crate::cli::BuildArgs;
use crate::commands::helpers::{load_config, resolve_project_path};
use crate::error::Result;
use crate::pipeline;
use crate::ui;

/// Run build command
pub fn run(project: Option<PathBuf>, config_file: Option<PathBuf>, args: BuildArgs) -> Result<()> {
    let project_dir = resolve_project_path(project)?;
    let config = load_config(&project_dir, config_file.as_deref(), &args.dirs)?;
    let bundle_config = assembler::assemble(&config, &project_dir)?;

    let artifacts = if args.keep_artifacts {
        Vec::new()
    } else {
        config.artifacts.clone()
    };

    let summary = pipeline::build(&bundle_config, &ConcatBundler::new(), &artifacts)?;
    ui::display_build_summary(&summary.report, &summary.rewrite);

    Ok(())
}
