//! File exclusion rule applied while copying the project into the output directory

use std::path::{Component, Path};

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::{Result, config::invalid_exclusion};

/// Default rule: hidden paths, dependency-manager directories, the tool's own
/// configuration, Grunt task files, documentation and the package manifest.
pub const DEFAULT_EXCLUDE: &str = r"^\.|^node_modules$|^bower_components$|^amdpack\.ya?ml$|^Gruntfile|^grunt-|\.md$|^package\.json$";

/// A regular expression tested against each component of a relative path
#[derive(Debug, Clone)]
pub struct ExclusionRule {
    pattern: Regex,
}

impl ExclusionRule {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern).map_err(|e| invalid_exclusion(pattern, e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether a single file or directory name is excluded
    pub fn excludes_name(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Whether a path relative to the base directory is excluded. A path is
    /// excluded when any of its components is.
    pub fn excludes(&self, relative: &Path) -> bool {
        relative.components().any(|component| match component {
            Component::Normal(name) => self.excludes_name(&name.to_string_lossy()),
            _ => false,
        })
    }
}

impl Default for ExclusionRule {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_EXCLUDE).expect("default exclusion pattern is valid"),
        }
    }
}

impl Serialize for ExclusionRule {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
