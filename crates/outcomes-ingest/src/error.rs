use std::path::PathBuf;

use thiserror::Error;

use outcomes_model::ModelError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        source: csv::Error,
    },
    #[error("{}: record {index}: {message}", path.display())]
    Record {
        path: PathBuf,
        index: usize,
        message: String,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
