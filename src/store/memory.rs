//! # In-Memory Lead Store

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::schema::LeadSubmissionInput;

use super::errors::{StoreError, StoreResult};
use super::lead::LeadSubmission;
use super::LeadStore;

/// Store contents guarded by a single lock so the counter and the map
/// always move together.
#[derive(Debug)]
struct Inner {
    /// Records by id. Ids are issued in increasing order under the write
    /// lock, so key order is insertion order.
    records: BTreeMap<u64, LeadSubmission>,
    next_id: u64,
}

/// Process-memory lead store. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryLeadStore {
    inner: RwLock<Inner>,
}

impl MemoryLeadStore {
    /// Create an empty store; the first id issued is 1
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryLeadStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadStore for MemoryLeadStore {
    fn create(&self, input: LeadSubmissionInput) -> StoreResult<LeadSubmission> {
        let mut inner = self.inner.write().map_err(|_| StoreError::poisoned())?;

        let id = inner.next_id;
        inner.next_id += 1;

        let record = LeadSubmission::from_input(id, input, Utc::now());
        inner.records.insert(id, record.clone());

        Ok(record)
    }

    fn list(&self) -> StoreResult<Vec<LeadSubmission>> {
        let inner = self.inner.read().map_err(|_| StoreError::poisoned())?;
        Ok(inner.records.values().cloned().collect())
    }

    fn len(&self) -> StoreResult<usize> {
        let inner = self.inner.read().map_err(|_| StoreError::poisoned())?;
        Ok(inner.records.len())
    }
}
