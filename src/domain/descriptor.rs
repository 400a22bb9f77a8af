//! Per-page bundling unit

use serde::Serialize;

use crate::domain::Page;

/// One bundling unit, produced for each page that declares components
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleDescriptor {
    /// Unit name, `bootstrap-<page>`
    pub name: String,

    /// Modules kept out of the unit; always holds the application module,
    /// which is loaded separately at runtime
    pub exclude: Vec<String>,

    /// Ordered, duplicate-free modules combined into the unit
    pub include: Vec<String>,

    /// Modules required when the unit is loaded
    pub insert_require: Vec<String>,
}

impl BundleDescriptor {
    pub fn new(page: &Page, app_module: &str, include: Vec<String>) -> Self {
        Self {
            name: page.bundle_name(),
            exclude: vec![app_module.to_string()],
            insert_require: include.clone(),
            include,
        }
    }

    /// File name emitted by the bundler for this unit
    pub fn output_file_name(&self) -> String {
        format!("{}.js", self.name)
    }
}
