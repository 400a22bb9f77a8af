//! Project layout errors

use std::path::Path;

use super::AmdpackError;

/// Creates a base directory not found error
pub fn base_not_found(path: &Path) -> AmdpackError {
    AmdpackError::BaseDirNotFound {
        path: path.display().to_string(),
    }
}
