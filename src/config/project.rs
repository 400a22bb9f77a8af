//! Project configuration (amdpack.yaml) data structures

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::exclusion::{DEFAULT_EXCLUDE, ExclusionRule};
use crate::error::{
    Result,
    config::{invalid, not_found, parse_failed},
    fs::read_failed,
};

/// Configuration file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "amdpack.yaml";

/// Optimization applied by the bundler. Only unminified output is supported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Optimize {
    #[default]
    None,
}

/// Project configuration from amdpack.yaml
///
/// Every key is optional. Relative directories are resolved against the
/// project directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding pages, components and extensions
    pub base_dir: PathBuf,

    /// Directory the bundler writes to
    pub out_dir: PathBuf,

    /// Shared application module, loaded separately at runtime
    pub app_module: String,

    /// Module aliases (e.g. `jquery: libs/jquery`)
    pub paths: BTreeMap<String, String>,

    /// Exclusion pattern tested against each path component
    pub exclude: String,

    pub optimize: Optimize,

    /// Remove combined module files from the output directory
    pub remove_combined: bool,

    /// Intermediate files deleted from the output directory after rewriting
    pub artifacts: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./"),
            out_dir: PathBuf::from("./release/"),
            app_module: "app".to_string(),
            paths: BTreeMap::new(),
            exclude: DEFAULT_EXCLUDE.to_string(),
            optimize: Optimize::None,
            remove_combined: true,
            artifacts: vec!["build.txt".to_string(), "build.js".to_string()],
        }
    }
}

impl ProjectConfig {
    /// Parse project configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a project directory.
    ///
    /// An explicitly named file must exist. Without one, `amdpack.yaml` in the
    /// project directory is used when present and defaults otherwise.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (project_dir.join(path), true),
            None => (project_dir.join(CONFIG_FILE_NAME), false),
        };

        let yaml = match fs::read_to_string(&path) {
            Ok(yaml) => yaml,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                if required {
                    return Err(not_found(path.display().to_string()));
                }
                log::debug!("No {} in {}, using defaults", CONFIG_FILE_NAME, project_dir.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(read_failed(&path, e)),
        };

        log::debug!("Loading configuration from {}", path.display());
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::AmdpackError::ConfigParseFailed { reason, .. } => {
                parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Validate project configuration
    pub fn validate(&self) -> Result<()> {
        if self.app_module.trim().is_empty() {
            return Err(invalid("app_module must not be empty"));
        }

        if self.out_dir.as_os_str().is_empty() {
            return Err(invalid("out_dir must not be empty"));
        }

        for artifact in &self.artifacts {
            let path = Path::new(artifact);
            if artifact.is_empty() || path.is_absolute() || path.components().count() != 1 {
                return Err(invalid(format!(
                    "artifact '{artifact}' must be a plain file name inside the output directory"
                )));
            }
        }

        for (alias, target) in &self.paths {
            if alias.is_empty() || target.is_empty() {
                return Err(invalid("path aliases must have a name and a target"));
            }
        }

        self.exclusion_rule()?;
        Ok(())
    }

    /// Compiled exclusion rule
    pub fn exclusion_rule(&self) -> Result<ExclusionRule> {
        ExclusionRule::new(&self.exclude)
    }

    /// Base directory resolved against the project directory
    pub fn resolved_base_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.base_dir)
    }

    /// Output directory resolved against the project directory
    pub fn resolved_out_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.out_dir)
    }
}
