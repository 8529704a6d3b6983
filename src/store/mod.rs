//! # Submission Store
//!
//! Sole authority for lead identity, creation time, and retrieval.
//!
//! # Invariants
//!
//! - Ids are unique and strictly increasing for the store's lifetime
//! - `submitted_at` is taken from the store clock, never from input
//! - Records are immutable; there is no update or delete
//! - `list` returns records in insertion order
//!
//! The store performs no validation. Callers hand it the
//! [`LeadSubmissionInput`] produced by [`crate::schema::validate`].

mod errors;
mod lead;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use lead::LeadSubmission;
pub use memory::MemoryLeadStore;

use crate::schema::LeadSubmissionInput;

/// Storage backend for lead submissions
pub trait LeadStore: Send + Sync {
    /// Assign an id and timestamp, persist, and return the full record
    fn create(&self, input: LeadSubmissionInput) -> StoreResult<LeadSubmission>;

    /// Every stored record, oldest first
    fn list(&self) -> StoreResult<Vec<LeadSubmission>>;

    /// Number of stored records
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
