//! Page and extension scanning
//!
//! This module handles:
//! - Reading a page and extracting its component declarations ([`html`])
//! - Reading the page's companion bootstrap script and extracting its
//!   extension registrations ([`script`])
//!
//! Absence is never an error here: a page without components or a page
//! without a companion script simply yields an empty list.

pub mod html;
pub mod lexer;
pub mod script;

use std::fs;
use std::io::ErrorKind;

use log::debug;

use crate::domain::{ModuleRef, Page};
use crate::error::{Result, fs::read_failed};

/// Components declared by a page, in first-seen order
pub fn scan_components(page: &Page) -> Result<Vec<ModuleRef>> {
    let content = fs::read_to_string(&page.path).map_err(|e| read_failed(&page.path, e))?;
    let components: Vec<ModuleRef> = html::component_ids(&content)
        .into_iter()
        .map(ModuleRef::Component)
        .collect();

    if components.is_empty() {
        debug!("{}: no data-component declarations", page.path.display());
    }

    Ok(components)
}

/// Extensions registered by the page's companion script, in source order
///
/// A missing companion script means the page registers no extensions.
pub fn scan_extensions(page: &Page) -> Result<Vec<ModuleRef>> {
    let script_path = page.companion_script();
    let content = match fs::read_to_string(&script_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{}: no companion script", page.path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(read_failed(&script_path, e)),
    };

    let extensions: Vec<ModuleRef> = script::extension_ids(&content)
        .into_iter()
        .map(ModuleRef::Extension)
        .collect();

    if extensions.is_empty() {
        debug!("{}: no app.use() registrations", script_path.display());
    }

    Ok(extensions)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn page_in(temp: &TempDir, file: &str, html: &str) -> Page {
        let path = temp.path().join(file);
        fs::write(&path, html).expect("Failed to write page");
        Page::from_path(&path).expect("Page name")
    }

    #[test]
    fn test_scan_components_from_file() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = page_in(
            &temp,
            "index.html",
            r#"<div data-component="hello"></div><div data-component="world"></div>"#,
        );

        let components = scan_components(&page).expect("scan");
        assert_eq!(
            components,
            vec![
                ModuleRef::Component("hello".into()),
                ModuleRef::Component("world".into())
            ]
        );
    }

    #[test]
    fn test_scan_components_missing_page_is_error() {
        let page = Page::from_path(std::path::Path::new("/nonexistent/index.html"))
            .expect("Page name");
        assert!(scan_components(&page).is_err());
    }

    #[test]
    fn test_scan_extensions_without_companion() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = page_in(&temp, "about.html", "<p></p>");
        assert!(scan_extensions(&page).expect("scan").is_empty());
    }

    #[test]
    fn test_scan_extensions_from_companion() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = page_in(&temp, "index.html", "<p></p>");
        fs::write(
            temp.path().join("bootstrap-index.js"),
            "require(['app'], function(app) {\n    app.use('mediator');\n    app.start();\n});\n",
        )
        .expect("Failed to write companion");

        assert_eq!(
            scan_extensions(&page).expect("scan"),
            vec![ModuleRef::Extension("mediator".into())]
        );
    }

    #[test]
    fn test_malformed_companion_yields_no_extensions() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let page = page_in(&temp, "index.html", "<p></p>");
        fs::write(temp.path().join("bootstrap-index.js"), "app.use(((")
            .expect("Failed to write companion");

        assert!(scan_extensions(&page).expect("scan").is_empty());
    }
}
