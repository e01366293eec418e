use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Input rejected before any entry is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("value is empty")]
    EmptyValue,

    #[error("value is not a number")]
    NotNumeric,

    #[error("running total would overflow")]
    OutOfRange,
}

/// Any fault between the ledger and the key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read key {key}: {source}")]
    Read {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to write key {key}: {source}")]
    Write {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("stored data under {key} is not valid: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
