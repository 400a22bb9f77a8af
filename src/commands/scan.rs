//! Scan command implementation
//!
//! Assembles the bundle configuration without writing anything and prints
//! it, either as a unit listing or as JSON.

use std::path::PathBuf;

use crate::assembler;
use crate::cli::ScanArgs;
use crate::commands::helpers::{load_config, resolve_project_path};
use crate::error::Result;
use crate::ui;

/// Run scan command
pub fn run(project: Option<PathBuf>, config_file: Option<PathBuf>, args: ScanArgs) -> Result<()> {
    let project_dir = resolve_project_path(project)?;
    let config = load_config(&project_dir, config_file.as_deref(), &args.dirs)?;
    let bundle_config = assembler::assemble(&config, &project_dir)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bundle_config)?);
    } else {
        ui::display_descriptors(&bundle_config.modules);
    }

    Ok(())
}
