//! Cache error types.

use thiserror::Error;

/// Errors that can occur while reading or writing cached payloads.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
