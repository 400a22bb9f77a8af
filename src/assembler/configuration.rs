//! Bundle configuration handed to the bundler
//!
//! Serialized field names follow the r.js build file keys, so `amdpack scan
//! --json` output can be read by anyone familiar with that format.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::filter::ContentFilter;
use crate::config::{ExclusionRule, Optimize};
use crate::domain::BundleDescriptor;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleConfiguration {
    #[serde(rename = "baseUrl")]
    pub base_dir: PathBuf,

    #[serde(rename = "dir")]
    pub out_dir: PathBuf,

    pub paths: BTreeMap<String, String>,

    #[serde(rename = "fileExclusionRegExp")]
    pub exclusion: ExclusionRule,

    pub optimize: Optimize,

    pub remove_combined: bool,

    pub modules: Vec<BundleDescriptor>,

    #[serde(skip)]
    pub content_filter: Box<dyn ContentFilter>,
}

impl BundleConfiguration {
    /// Apply path aliases to a module id.
    ///
    /// The longest alias matching a leading run of path segments wins, so with
    /// `jquery: libs/jquery` both `jquery` and `jquery/ui` are rewritten.
    pub fn resolve_module(&self, module: &str) -> String {
        let mut prefix = module;
        loop {
            if let Some(target) = self.paths.get(prefix) {
                return format!("{target}{}", &module[prefix.len()..]);
            }
            match prefix.rfind('/') {
                Some(slash) => prefix = &prefix[..slash],
                None => return module.to_string(),
            }
        }
    }

    /// Source file of a module under the base directory
    pub fn module_file(&self, module: &str) -> PathBuf {
        self.base_dir.join(format!("{}.js", self.resolve_module(module)))
    }

    /// Whether a path relative to the base directory is left out of the output
    pub fn is_excluded(&self, relative: &Path) -> bool {
        self.exclusion.excludes(relative)
    }
}
