use std::path::PathBuf;

use locmap_layout::LayoutError;
use miette::Diagnostic;
use thiserror::Error;

/// CLI-specific error type that provides rich diagnostics
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("I/O error while {operation} '{}'", .path.display())]
    #[diagnostic(code(locmap::cli::io_error))]
    IoError {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration in '{}'", .path.display())]
    #[diagnostic(
        code(locmap::cli::config_error),
        help("locmap.toml accepts an [output] and an [emit] table; every key is optional")
    )]
    ConfigError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Cannot tell whether '{}' is a map document or a location table", .path.display())]
    #[diagnostic(
        code(locmap::cli::unknown_format),
        help("Use a .json map document or a .bin table written by `locmap encode`")
    )]
    UnknownFormat { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Layout(#[from] LayoutError),
}

/// Convert IO errors with context
pub fn convert_io_error(error: std::io::Error, path: PathBuf, operation: &str) -> CliError {
    CliError::IoError {
        path,
        operation: operation.to_string(),
        source: error,
    }
}
