//! Attempt store - append-only log of evaluated passwords.

use std::sync::{PoisonError, RwLock};

use crate::error::{StoreError, ValidationError};
use crate::record::PasswordRecord;

/// Append-only record of evaluated passwords with exact-match lookup.
pub trait AttemptStore: Send + Sync {
    /// Appends a record. Duplicates are kept.
    fn save(&self, record: PasswordRecord) -> Result<(), StoreError>;

    /// Returns the first stored record whose raw password equals `value`.
    ///
    /// # Errors
    /// `ValidationError::NotFound` when nothing matches.
    fn find_by_value(&self, value: &str) -> Result<PasswordRecord, ValidationError>;

    /// Number of stored attempts.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Memory-resident [`AttemptStore`], cleared when the process exits.
///
/// Unbounded unless built with [`InMemoryAttemptStore::bounded`].
#[derive(Debug, Default)]
pub struct InMemoryAttemptStore {
    records: RwLock<Vec<PasswordRecord>>,
    limit: Option<usize>,
}

impl InMemoryAttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects appends once it holds `limit` records.
    pub fn bounded(limit: usize) -> Self {
        Self {
            records: RwLock::default(),
            limit: Some(limit),
        }
    }
}

// The vector is only ever pushed to, so a panic while the lock is held cannot
// leave a partial entry behind and poisoning is safe to ignore.
impl AttemptStore for InMemoryAttemptStore {
    fn save(&self, record: PasswordRecord) -> Result<(), StoreError> {
        let mut records = self.records.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(limit) = self.limit {
            if records.len() >= limit {
                return Err(StoreError::CapacityExceeded { limit });
            }
        }

        records.push(record);
        Ok(())
    }

    fn find_by_value(&self, value: &str) -> Result<PasswordRecord, ValidationError> {
        let records = self.records.read().unwrap_or_else(PoisonError::into_inner);

        records
            .iter()
            .find(|record| record.matches(value))
            .cloned()
            .ok_or_else(|| ValidationError::NotFound {
                entity: "Password",
                id: value.to_string(),
            })
    }

    fn len(&self) -> usize {
        self.records.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
