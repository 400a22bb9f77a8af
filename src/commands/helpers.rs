//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::cli::DirArgs;
use crate::config::ProjectConfig;
use crate::error::{Result, fs::io_error};

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Load the project configuration and apply command line directory overrides
pub fn load_config(
    project_dir: &Path,
    config_file: Option<&Path>,
    dirs: &DirArgs,
) -> Result<ProjectConfig> {
    let mut config = ProjectConfig::load(project_dir, config_file)?;

    if let Some(base) = &dirs.base {
        config.base_dir.clone_from(base);
    }
    if let Some(out) = &dirs.out {
        config.out_dir.clone_from(out);
    }

    config.validate()?;
    Ok(config)
}
