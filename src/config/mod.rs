//! Configuration handling for amdpack
//!
//! This module contains:
//! - `amdpack.yaml` - Project configuration ([`project`])
//! - The file exclusion rule used when copying the project ([`exclusion`])

pub mod exclusion;
pub mod project;

// Re-export commonly used types
pub use exclusion::ExclusionRule;
pub use project::{Optimize, ProjectConfig};
