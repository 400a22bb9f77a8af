//! Configuration errors

use super::AmdpackError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> AmdpackError {
    AmdpackError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> AmdpackError {
    AmdpackError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> AmdpackError {
    AmdpackError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid exclusion pattern error
pub fn invalid_exclusion(pattern: impl Into<String>, reason: impl Into<String>) -> AmdpackError {
    AmdpackError::InvalidExclusionPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
