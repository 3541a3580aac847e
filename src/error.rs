//! Error handling for cpp-scaffold.
//! Defines the error type and result alias used by every stage of the pipeline.

use thiserror::Error;

/// Errors produced while resolving options, loading templates or writing the project.
///
/// Parse diagnostics and validation warnings are not errors; they travel as values
/// next to the results. Only conditions that stop a command end up here.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}.")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Git error: {0}.")]
    Git2Error(#[from] git2::Error),

    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors that occur while reading the tool configuration
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in template skeletons or their content
    #[error("Template error: {0}.")]
    TemplateError(String),

    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExistsError { template_dir: String },

    /// The template source is recognized but cannot be fetched offline
    #[error("Unsupported template source: {source_kind}. Only built-in templates and local paths can be used.")]
    UnsupportedSourceError { source_kind: String },

    #[error("Profile error: {0}.")]
    ProfileError(String),

    /// The resolved configuration has validation errors and `--force` was not given
    #[error("Configuration is invalid:\n  - {}\ntip: pass --force to generate anyway.", .errors.join("\n  - "))]
    ValidationError { errors: Vec<String> },

    #[error("Output directory already exists: {output_dir}. Use --force to overwrite it.")]
    OutputDirectoryExistsError { output_dir: String },

    /// Represents errors in processing .scaffoldignore files
    #[error("Ignore file error: {0}.")]
    IgnoreError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
