// models/src/errors.rs

use std::io;
pub use thiserror::Error;

/// Shared error type for the query engine and its hosting layers.
///
/// The query core itself never fails; these variants cover the edges of
/// the system (loading snapshots, reading configuration, decoding wire
/// payloads).
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Invalid data provided: {0}")]
    InvalidData(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Serialization error: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
