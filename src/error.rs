use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read the template tree. Original error: {0}")]
    WalkDirError(#[from] walkdir::Error),

    #[error("Failed to parse .stampignore file. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to parse JSON. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Failed to read user input. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    #[error("Invalid template configuration: {0}.")]
    ConfigValidation(String),

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDoesNotExistsError { template_dir: String },

    #[error("Cannot proceed: template path '{template_dir}' is not a directory.")]
    TemplateNotADirectoryError { template_dir: String },

    #[error("Cannot proceed: project directory '{project_dir}' is inside the template '{template_dir}'.")]
    OutputInsideTemplate { project_dir: String, template_dir: String },

    #[error("Path '{path}' contains invalid Unicode characters.")]
    InvalidUnicodePath { path: String },

    #[error("Cannot process the source path: '{source_path}'. Original error: {e}")]
    ProcessError { source_path: String, e: String },
}

/// Convenience type alias for Results with stamp's Error as the error type.
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
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
