use thiserror::Error;

/// Result alias used by every fallible entry point of the crate.
pub type Result<T> = std::result::Result<T, XorError>;

/// Errors raised while validating configuration and data, or while writing
/// reports. The numeric core itself never returns these; it asserts.
#[derive(Error, Debug)]
pub enum XorError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("dimension mismatch in {context}: expected {expected}, found {found}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        found: usize,
    },

    #[error("non-finite value in {0}")]
    NonFinite(String),

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
