//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// Well-formed input never fails; the only failure is a poisoned lock
/// left behind by a panicking writer.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    pub(crate) fn poisoned() -> Self {
        StoreError::Internal("Lock poisoned".into())
    }
}
