use thiserror::Error;

#[derive(Error, Debug)]
pub enum DailyError {
    #[error("Duplicate paper id: {0}")]
    DuplicateId(String),

    #[error("{first} and {second} would both be written to {file}")]
    FileCollision {
        file: String,
        first: String,
        second: String,
    },

    #[error("Invalid record {id}: {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] inkstand::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

pub type Result<T> = std::result::Result<T, DailyError>;
