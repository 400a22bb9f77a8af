//! Rewrite command implementation
//!
//! Re-derives the bundling units by scanning the project, then rewrites the
//! units already present in the output directory. Useful when the output was
//! produced by an external bundler.

use std::path::PathBuf;

use crate::assembler;
use crate::cli::RewriteArgs;
use crate::commands::helpers::{load_config, resolve_project_path};
use crate::error::Result;
use crate::pipeline;
use crate::ui;

/// Run rewrite command
pub fn run(
    project: Option<PathBuf>,
    config_file: Option<PathBuf>,
    args: RewriteArgs,
) -> Result<()> {
    let project_dir = resolve_project_path(project)?;
    let config = load_config(&project_dir, config_file.as_deref(), &args.dirs)?;
    let bundle_config = assembler::assemble(&config, &project_dir)?;

    let artifacts = if args.keep_artifacts {
        Vec::new()
    } else {
        config.artifacts.clone()
    };

    let summary = pipeline::rewrite(&bundle_config, &artifacts)?;
    ui::display_rewrite_summary(&summary);

    Ok(())
}
