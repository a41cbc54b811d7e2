//! Error types for Packstore

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("A pack cannot be stored inside another pack")]
    NestedPack,

    #[error("Could not create data directory: {0}")]
    DataDir(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
