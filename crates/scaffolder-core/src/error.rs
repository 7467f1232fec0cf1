//! Error taxonomy for a scaffolding run
//!
//! Every variant is fatal except `Validation` raised from an interactive
//! prompt, which the prompt recovers from by asking again.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// User input rejected (empty project name and friends)
    #[error("{0}")]
    Validation(String),

    /// External process failed to spawn or exited non-zero
    #[error("Error executing command: {command}\n{message}")]
    Command { command: String, message: String },

    /// Directory creation or file write failed
    #[error("Failed to write {}: {message}", path.display())]
    Io { path: PathBuf, message: String },

    /// package.json could not be read, parsed, or updated
    #[error("Invalid package manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    /// Setup label did not match any known variant
    #[error("Invalid setup type.")]
    InvalidSelection,

    /// Embedded variant recipes are malformed
    #[error("Invalid variant recipes: {0}")]
    Registry(String),
}

impl ScaffoldError {
    pub fn command(command: &str, message: impl Into<String>) -> Self {
        Self::Command {
            command: command.to_string(),
            message: message.into(),
        }
    }

    pub fn io(path: &Path, err: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
