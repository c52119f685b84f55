//! Project name validation.
//!
//! A project name becomes both the root directory name and the importable
//! Python package name, so hyphens are rejected up front: Python import
//! machinery and type checkers expect the import name to match the package
//! name, and hyphens are not valid in identifiers.

use crate::error::{Error, Result};
use std::fmt::Display;

/// A validated project name.
///
/// Invariant: non-empty and free of hyphens. No other structural
/// constraints are enforced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validates `name` and wraps it.
    ///
    /// # Errors
    /// * `Error::EmptyProjectName` if the name is empty
    /// * `Error::InvalidProjectName` if the name contains a hyphen; the
    ///   error carries a suggestion with every hyphen replaced by an
    ///   underscore
    pub fn new(name: &str) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyProjectName);
        }
        if name.contains('-') {
            return Err(Error::InvalidProjectName {
                name: name.to_string(),
                suggestion: name.replace('-', "_"),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
