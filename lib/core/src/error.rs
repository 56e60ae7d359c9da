use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing field '{0}'")]
    MissingField(String),

    #[error("invalid value for field '{field}': '{value}' is not a number")]
    InvalidNumber { field: String, value: String },

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("artifact error: {0}")]
    Artifact(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),
}
