//! Error types and handling for amdpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`project`]: Project layout errors
//! - [`config`]: Configuration errors
//! - [`bundle`]: Bundling and rewriting errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod project;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for amdpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum AmdpackError {
    // Project errors
    #[error("Base directory not found: {path}")]
    #[diagnostic(
        code(amdpack::project::base_not_found),
        help("Run amdpack from the project root or pass --base <dir>")
    )]
    BaseDirNotFound { path: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(amdpack::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(code(amdpack::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(amdpack::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Invalid exclusion pattern '{pattern}': {reason}")]
    #[diagnostic(
        code(amdpack::config::invalid_exclusion),
        help("The exclusion rule is a regular expression matched against each path component")
    )]
    InvalidExclusionPattern { pattern: String, reason: String },

    // Bundle errors
    #[error("Bundler failed: {message}")]
    #[diagnostic(code(amdpack::bundle::bundler_failed))]
    BundlerFailed { message: String },

    #[error("Module '{module}' not found at {path}")]
    #[diagnostic(
        code(amdpack::bundle::module_not_found),
        help("Check that the component or extension directory exists and contains the module file")
    )]
    ModuleSourceNotFound { module: String, path: String },

    #[error("Bundle '{unit}' loads {count} modules, at most 26 can be auto-initialised")]
    #[diagnostic(
        code(amdpack::bundle::too_many_modules),
        help("Split the page's components across pages or drop unused declarations")
    )]
    TooManyModules { unit: String, count: usize },

    // File system errors
    #[error("Failed to read file: {path}")]
    #[diagnostic(code(amdpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(amdpack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(amdpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AmdpackError {
    fn from(err: std::io::Error) -> Self {
        AmdpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AmdpackError {
    fn from(err: serde_yaml::Error) -> Self {
        AmdpackError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AmdpackError {
    fn from(err: serde_json::Error) -> Self {
        AmdpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for AmdpackError {
    fn from(err: walkdir::Error) -> Self {
        AmdpackError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AmdpackError>;
