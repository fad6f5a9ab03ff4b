//! Error types for the Quadcell command line

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the Quadcell application
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Malformed edit '{0}' (expected CELL=TEXT, e.g. A=12)")]
    MalformedEdit(String),

    #[error(transparent)]
    Store(#[from] quadcell_core::QuadcellError),

    #[error("Failed to parse {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CliError>;
