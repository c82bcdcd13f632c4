//! Error handling for the scone application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for scone operations.
///
/// This enum represents all possible errors that can occur while generating
/// an add-on package. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised by the template engine
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors raised by the interactive prompt
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors raised while initializing the package repository
    #[error("Git error: {0}.")]
    GitError(#[from] git2::Error),

    /// Represents errors during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents recoverable validation failures in user input.
    /// The question pipeline re-prompts on this error in interactive mode.
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors in processing ignore pattern files
    #[error("Ignore pattern error: {0}.")]
    IgnoreError(String),

    /// The template argument resolved to neither a built-in template
    /// nor an existing directory.
    #[error("Template '{template}' not found (not a built-in template or an existing directory).")]
    TemplateNotFoundError { template: String },

    /// The user declined a confirmation that gates the rest of the run.
    #[error("Aborted!")]
    Aborted,
}

/// Convenience type alias for Results with scone's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
