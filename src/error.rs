//! Error types and handling for compforge
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors are grouped by domain: archive (the `pack` command), scaffold (the
//! `new` command) and plain file system failures shared by both.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for compforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum CompforgeError {
    // Archive errors
    #[error("No input paths given")]
    #[diagnostic(
        code(compforge::archive::no_inputs),
        help("Pass at least one file or directory to add to the archive")
    )]
    ArchiveNoInputs,

    #[error("Input path not found: {path}")]
    #[diagnostic(
        code(compforge::archive::input_missing),
        help("Check that every input path exists and is readable")
    )]
    ArchiveInputMissing { path: String },

    #[error("Failed to create archive: {path}: {reason}")]
    #[diagnostic(code(compforge::archive::create_failed))]
    ArchiveCreateFailed { path: String, reason: String },

    #[error("Failed to write archive entry: {path}: {reason}")]
    #[diagnostic(code(compforge::archive::write_failed))]
    ArchiveWriteFailed { path: String, reason: String },

    // Scaffold errors
    #[error("Invalid component name '{name}': {reason}")]
    #[diagnostic(
        code(compforge::scaffold::invalid_name),
        help("Component names must be valid C++ identifiers, e.g. HealthComponent")
    )]
    InvalidComponentName { name: String, reason: String },

    #[error("One or more files already exist: {paths}")]
    #[diagnostic(
        code(compforge::scaffold::already_exists),
        help("Remove the existing files or choose another component name")
    )]
    ScaffoldTargetsExist { paths: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(compforge::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(compforge::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(compforge::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CompforgeError {
    fn from(err: std::io::Error) -> Self {
        CompforgeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CompforgeError>;

// Convenience constructors, grouped by domain

pub fn input_missing(path: impl Into<String>) -> CompforgeError {
    CompforgeError::ArchiveInputMissing { path: path.into() }
}

pub fn archive_create_failed(
    path: impl Into<String>,
    reason: impl Into<String>,
) -> CompforgeError {
    CompforgeError::ArchiveCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn archive_write_failed(path: impl Into<String>, reason: impl Into<String>) -> CompforgeError {
    CompforgeError::ArchiveWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn invalid_component_name(
    name: impl Into<String>,
    reason: impl Into<String>,
) -> CompforgeError {
    CompforgeError::InvalidComponentName {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Joins the offending paths into one message; the abort is all-or-nothing.
pub fn scaffold_targets_exist(paths: &[String]) -> CompforgeError {
    CompforgeError::ScaffoldTargetsExist {
        paths: paths.join(", "),
    }
}

pub fn file_read_failed(path: impl Into<String>, reason: impl Into<String>) -> CompforgeError {
    CompforgeError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

pub fn file_write_failed(path: impl Into<String>, reason: impl Into<String>) -> CompforgeError {
    CompforgeError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
