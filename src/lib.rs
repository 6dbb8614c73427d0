/// Author lookup for the `%username%` token.
pub mod author;

/// Handles argument parsing and the generation workflow.
pub mod cli;

/// Discovers the files of a template tree.
pub mod collector;

/// Configuration handling for stamp templates.
pub mod config;

pub mod constants;

/// Text encoding detection.
pub mod encoding;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// Processes .stampignore files to exclude specific paths.
pub mod ignore;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Resolves the template root.
pub mod loader;

pub mod params;

/// User input and interaction handling.
pub mod prompt;

/// Per-file template processing.
pub mod template;

pub mod token;

/// Answer validators
pub mod validation;
