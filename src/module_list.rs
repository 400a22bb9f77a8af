//! Inclusion list for a page's bundling unit
//!
//! Extensions come first, then components. Source order is kept within each
//! group and a module named twice keeps only its first position. The runtime
//! initialises components starting from the first component position, so the
//! ordering is load-bearing.

use std::collections::HashSet;

use crate::domain::ModuleRef;

/// Merge a page's extensions and components into one ordered, duplicate-free
/// list of module paths
pub fn build_module_list(extensions: &[ModuleRef], components: &[ModuleRef]) -> Vec<String> {
    let mut seen = HashSet::new();
    extensions
        .iter()
        .chain(components)
        .map(ModuleRef::module_path)
        .filter(|path| seen.insert(path.clone()))
        .collect()
}
