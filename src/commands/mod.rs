//! Command implementations for amdpack CLI

pub mod build;
pub mod completions;
pub mod helpers;
pub mod rewrite;
pub mod scan;
pub mod version;
