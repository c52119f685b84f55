//! pyinit scaffolds a new Python project: it validates the project name,
//! creates the nested package layout, writes a fixed set of templated
//! files (entry point, .gitignore, flake.nix, pyproject.toml, README) and
//! optionally initializes a git repository and a Poetry lock file.

/// Command-line interface module for the pyinit application
pub mod cli;

/// Error types and handling for the pyinit application
pub mod error;

/// Project name validation (directory name and Python package name)
pub mod name;

/// Project initialization: directory layout and template file emission
pub mod project;

/// MiniJinja-based rendering of the embedded templates
pub mod renderer;

/// External command execution behind an injectable trait
pub mod runner;

/// The embedded template set parameterized by the project name
pub mod templates;

/// Version-control detection and repository setup
pub mod vcs;
