use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FollowbackError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing input file: {}", .0.display())]
    MissingInputFile(PathBuf),

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unrecognized export format: root is {kind}, expected an object or array")]
    UnrecognizedFormat { kind: &'static str },
}

pub type Result<T> = std::result::Result<T, FollowbackError>;
