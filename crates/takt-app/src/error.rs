//! Error types for the takt-app service layer.
//!
//! The engine itself has no fatal conditions; everything here comes from
//! the file and serialization boundary around it.

use std::path::PathBuf;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read plan file: {path}")]
    PlanFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write plan file: {path}")]
    PlanFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Plan error: {0}")]
    Plan(String),

    #[error("Plan validation failed: {0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
