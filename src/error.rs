//! Error handling for the pyinit application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for pyinit operations.
///
/// Only name validation failures are translated into a curated,
/// user-facing diagnostic; every other failure surfaces the underlying
/// low-level error as-is.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested project name contains a hyphen.
    #[error(
        "Error: Hyphens ('-') are not allowed in Python package names.\n\
         This causes issues with mypy and other tools that expect import names to match package names.\n\
         Please use underscores ('_') instead.\n\
         Suggestion: Use '{suggestion}' instead of '{name}'"
    )]
    InvalidProjectName { name: String, suggestion: String },

    /// The project name must be a non-empty string.
    #[error("Error: The project name must not be empty.")]
    EmptyProjectName,

    /// The target directory already exists; pyinit never overwrites.
    #[error("Directory '{project_dir}' already exists.")]
    ProjectDirectoryExists { project_dir: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during template rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents failures spawning an external command
    #[error("Failed to run '{program}': {detail}.")]
    CommandError { program: String, detail: String },
}

/// Convenience type alias for Results with pyinit's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
