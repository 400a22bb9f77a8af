//! Bundler seam
//!
//! The bundler turns a [`BundleConfiguration`] into one emitted script per
//! bundling unit. It is the only step of a build that writes module sources;
//! everything before it is read-only and everything after it patches what it
//! produced. [`ConcatBundler`] is the built-in implementation.

pub mod concat;

use std::path::PathBuf;

use serde::Serialize;

pub use concat::ConcatBundler;

use crate::assembler::BundleConfiguration;
use crate::error::Result;

/// Produces bundled output from a configuration.
///
/// An `Err` aborts the build: nothing is rewritten and no artifacts are
/// removed.
pub trait Bundler {
    fn bundle(&self, config: &BundleConfiguration) -> Result<BuildReport>;
}

/// What the bundler emitted for one unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitReport {
    pub name: String,
    pub output: PathBuf,
    /// Source files combined into the unit, relative to the base directory
    pub files: Vec<String>,
}

/// Detail report returned on a successful bundle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub units: Vec<UnitReport>,
    /// Files copied into the output directory
    pub copied: usize,
}

impl BuildReport {
    /// Human-readable log, one section per unit
    pub fn to_log(&self) -> String {
        let mut log = String::new();
        for unit in &self.units {
            let heading = format!("{}.js", unit.name);
            log.push('\n');
            log.push_str(&format!("{heading}\n{}\n", "-".repeat(heading.len())));
            for file in &unit.files {
                log.push_str(file);
                log.push('\n');
            }
        }
        log
    }
}
