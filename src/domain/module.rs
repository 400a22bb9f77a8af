//! Module references declared by pages
//!
//! Components and extensions live in fixed directory layouts:
//! `components/<id>/component` and `extensions/<id>/extension`.

const COMPONENTS_DIR: &str = "components";
const COMPONENT_FILE: &str = "component";
const EXTENSIONS_DIR: &str = "extensions";
const EXTENSION_FILE: &str = "extension";

/// A component or extension named by a page
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ModuleRef {
    Component(String),
    Extension(String),
}

impl ModuleRef {
    pub fn is_component(&self) -> bool {
        matches!(self, ModuleRef::Component(_))
    }

    /// Module id understood by the loader, e.g. `components/hello/component`
    pub fn module_path(&self) -> String {
        match self {
            ModuleRef::Component(id) => format!("{COMPONENTS_DIR}/{id}/{COMPONENT_FILE}"),
            ModuleRef::Extension(id) => format!("{EXTENSIONS_DIR}/{id}/{EXTENSION_FILE}"),
        }
    }

    /// Parse a module id back into a reference.
    ///
    /// Returns `None` for anything outside the two known layouts (library modules,
    /// aliases, nested paths).
    pub fn parse(module_path: &str) -> Option<Self> {
        let mut parts = module_path.split('/');
        let (dir, id, file) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() || id.is_empty() {
            return None;
        }

        match (dir, file) {
            (COMPONENTS_DIR, COMPONENT_FILE) => Some(ModuleRef::Component(id.to_string())),
            (EXTENSIONS_DIR, EXTENSION_FILE) => Some(ModuleRef::Extension(id.to_string())),
            _ => None,
        }
    }
}

/// Whether a module id follows the component layout
pub fn is_component_path(module_path: &str) -> bool {
    ModuleRef::parse(module_path).is_some_and(|r| r.is_component())
}
