//! Pages discovered at the project root

use std::path::{Path, PathBuf};

const BOOTSTRAP_PREFIX: &str = "bootstrap-";

/// An HTML page that may declare components
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Path to the HTML file
    pub path: PathBuf,

    /// Page name: the file name up to its first dot (`about.html` -> `about`)
    pub name: String,
}

impl Page {
    /// Build a page from an HTML file path. Returns `None` when the file name
    /// yields no usable page name (e.g. `.html`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let name = file_name.split('.').next()?;
        if name.is_empty() {
            return None;
        }

        Some(Self {
            path: path.to_path_buf(),
            name: name.to_string(),
        })
    }

    /// Name of the bundling unit produced for this page
    pub fn bundle_name(&self) -> String {
        format!("{BOOTSTRAP_PREFIX}{}", self.name)
    }

    /// Companion bootstrap script, relative to the page's directory
    pub fn companion_script(&self) -> PathBuf {
        let file_name = format!("{}.js", self.bundle_name());
        match self.path.parent() {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

/// Whether a file name belongs to a page bootstrap script
pub fn is_bootstrap_file(file_name: &str) -> bool {
    file_name.starts_with(BOOTSTRAP_PREFIX)
}
