//! Bundling and rewriting errors

use super::AmdpackError;

/// Creates a bundler failure error
pub fn bundler_failed(message: impl Into<String>) -> AmdpackError {
    AmdpackError::BundlerFailed {
        message: message.into(),
    }
}

/// Creates a module source not found error
pub fn module_not_found(module: impl Into<String>, path: impl Into<String>) -> AmdpackError {
    AmdpackError::ModuleSourceNotFound {
        module: module.into(),
        path: path.into(),
    }
}

/// Creates a too many modules error for the load call rewriter
pub fn too_many_modules(unit: impl Into<String>, count: usize) -> AmdpackError {
    AmdpackError::TooManyModules {
        unit: unit.into(),
        count,
    }
}
