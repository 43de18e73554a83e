use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the collaborator, storage, and CLI layers.
///
/// The projection engine itself never fails; every variant here originates
/// outside of it (input gathering, persistence, or configuration).
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Projection failed: {0}")]
    Source(String),
}

pub type Result<T> = StdResult<T, ProjectionError>;
