use std::path::PathBuf;
use thiserror::Error;

/// Errors raised around the query core: loading datasets and configuration,
/// and resolving user-supplied screen or dimension names.
///
/// The engine and the filter controller never produce these; a mismatched
/// selection degrades to an empty result instead.
#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Dataset not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] confique::Error),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Screen '{screen}' has no '{dimension}' filter")]
    UnknownDimension { screen: String, dimension: String },
}

pub type Result<T> = std::result::Result<T, PortalError>;
