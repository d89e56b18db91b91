//! Error Types
//!
//! Every fallible operation in the quotation core returns `QuoteResult`.

use thiserror::Error;

/// Quotation-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuoteError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Local storage unavailable, quota exceeded, or a rejected write
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Print or share failed in the browser
    #[error("Export failed: {0}")]
    Export(String),
}

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::Serialization(e.to_string())
    }
}

/// Common result type for quotation operations
pub type QuoteResult<T> = Result<T, QuoteError>;
