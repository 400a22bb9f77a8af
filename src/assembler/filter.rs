//! Content filter invoked by the bundler for every source file it reads

use std::borrow::Cow;
use std::fmt::Debug;
use std::path::Path;

use crate::domain::page::is_bootstrap_file;

/// Hook that may replace a source file's contents before it is combined
pub trait ContentFilter: Debug + Send + Sync {
    fn filter<'a>(&self, module_name: &str, path: &Path, contents: &'a str) -> Cow<'a, str>;
}

/// Blanks page bootstrap scripts and the shared application module so they are
/// not duplicated inside a bundle. Both are loaded separately at runtime.
#[derive(Debug, Clone)]
pub struct BootstrapFilter {
    app_module: String,
}

impl BootstrapFilter {
    pub fn new(app_module: impl Into<String>) -> Self {
        Self {
            app_module: app_module.into(),
        }
    }

    fn is_app_module(&self, module_name: &str, path: &Path) -> bool {
        if module_name == self.app_module {
            return true;
        }
        let app_file = format!("{}.js", self.app_module);
        path.file_name().and_then(|n| n.to_str()) == Some(app_file.as_str())
    }
}

impl ContentFilter for BootstrapFilter {
    fn filter<'a>(&self, module_name: &str, path: &Path, contents: &'a str) -> Cow<'a, str> {
        let is_bootstrap = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(is_bootstrap_file);

        if is_bootstrap || self.is_app_module(module_name, path) {
            Cow::Borrowed("")
        } else {
            Cow::Borrowed(contents)
        }
    }
}
