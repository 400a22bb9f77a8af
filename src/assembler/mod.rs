//! Bundle configuration assembly
//!
//! Discovers the pages of a project, scans each for components and extensions,
//! and produces one [`BundleDescriptor`] per page that declares at least one
//! component. This step only reads files.

pub mod configuration;
pub mod filter;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

pub use configuration::BundleConfiguration;
pub use filter::BootstrapFilter;

use crate::config::ProjectConfig;
use crate::domain::{BundleDescriptor, Page};
use crate::error::{Result, fs::read_failed, project::base_not_found};
use crate::module_list::build_module_list;
use crate::scanner;

const PAGE_EXTENSION: &str = "html";

/// HTML pages directly inside the base directory, ordered by file name
pub fn discover_pages(base_dir: &Path) -> Result<Vec<Page>> {
    if !base_dir.is_dir() {
        return Err(base_not_found(base_dir));
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(base_dir)
        .map_err(|e| read_failed(base_dir, e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PAGE_EXTENSION))
        })
        .collect();
    paths.sort();

    Ok(paths.iter().filter_map(|path| Page::from_path(path)).collect())
}

/// Descriptor for a single page, or `None` when the page declares no components
pub fn describe_page(page: &Page, app_module: &str) -> Result<Option<BundleDescriptor>> {
    let components = scanner::scan_components(page)?;
    if components.is_empty() {
        debug!("Skipping {}: no components declared", page.path.display());
        return Ok(None);
    }

    let extensions = scanner::scan_extensions(page)?;
    let include = build_module_list(&extensions, &components);
    debug!(
        "{}: {} extension(s), {} component(s)",
        page.bundle_name(),
        extensions.len(),
        components.len()
    );

    Ok(Some(BundleDescriptor::new(page, app_module, include)))
}

/// Build the bundle configuration for a project
pub fn assemble(config: &ProjectConfig, project_dir: &Path) -> Result<BundleConfiguration> {
    let base_dir = config.resolved_base_dir(project_dir);
    let pages = discover_pages(&base_dir)?;

    let mut modules = Vec::new();
    for page in &pages {
        if let Some(descriptor) = describe_page(page, &config.app_module)? {
            modules.push(descriptor);
        }
    }

    info!(
        "Found {} page(s), {} bundling unit(s)",
        pages.len(),
        modules.len()
    );

    Ok(BundleConfiguration {
        out_dir: config.resolved_out_dir(project_dir),
        base_dir,
        paths: config.paths.clone(),
        exclusion: config.exclusion_rule()?,
        optimize: config.optimize,
        remove_combined: config.remove_combined,
        modules,
        content_filter: Box::new(BootstrapFilter::new(config.app_module.clone())),
    })
}
