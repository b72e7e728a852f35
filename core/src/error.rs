use crate::DocId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("invalid document on line {line}: {reason}")]
    InvalidDocument { line: usize, reason: String },

    #[error("unknown storage policy: {0}")]
    UnknownPolicy(String),

    #[error("storage policy '{0}' is not implemented")]
    Unsupported(String),

    #[error("corrupt index: {0}")]
    Corrupt(String),

    #[error("document id {doc_id} of word '{word}' does not fit the binary format (max 65535)")]
    DocIdOutOfRange { word: String, doc_id: DocId },

    #[error("index does not fit the binary format: {0}")]
    FormatLimit(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IndexError {
    pub(crate) fn corrupt(reason: impl Into<String>) -> Self {
        IndexError::Corrupt(reason.into())
    }
}
