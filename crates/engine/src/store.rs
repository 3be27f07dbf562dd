//! Record store
//!
//! Ordered, in-memory collection of [`Record`]s keyed by registration number.
//!
//! # Design
//!
//! - Backed by a plain `Vec`: sequence order is insertion order and is the
//!   display order handed to the grid.
//! - Keys form a set. `insert` is the only operation that introduces a key,
//!   and it rejects collisions.
//! - Lookups are linear scans. Row counts are bounded by what a grid shows,
//!   so no secondary index is kept.
//! - Every failed operation leaves the sequence untouched.
//! - Rejections are routine user input errors and are logged at debug level;
//!   the caller reports them.

use roster_core::{Record, RecordChanges, RegistrationNumber, RosterError, RosterResult};

/// In-memory ordered record collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

/// Demo rows the store starts with when no configuration says otherwise
pub fn demo_seed() -> Vec<Record> {
    vec![
        Record::new("Yuva", "Intern", 205),
        Record::new("Suresh", "CEO", 195),
        Record::new("Jeeva", "Manager", 123),
    ]
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo seed
    pub fn seeded() -> Self {
        Self {
            records: demo_seed(),
        }
    }

    /// Build a store by inserting `records` in order
    ///
    /// Fails with the first error `insert` would report, so a seed with a
    /// blank field or a repeated key is rejected as a whole.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> RosterResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Append a new record
    ///
    /// Field validation runs before the duplicate check.
    ///
    /// # Errors
    ///
    /// - `Validation` if name or designation is blank
    /// - `DuplicateKey` if a record already carries the same registration number
    pub fn insert(&mut self, candidate: Record) -> RosterResult<()> {
        if let Err(e) = candidate.validate() {
            tracing::debug!(target: "roster::store", key = %candidate.key(), error = %e, "insert rejected");
            return Err(e);
        }
        let key = candidate.key();
        if self.contains(key) {
            tracing::debug!(target: "roster::store", %key, "insert rejected: duplicate key");
            return Err(RosterError::DuplicateKey { key });
        }
        self.records.push(candidate);
        tracing::debug!(target: "roster::store", %key, len = self.records.len(), "record inserted");
        Ok(())
    }

    /// Replace name and designation of the record addressed by `key`
    ///
    /// Position in the sequence and the key itself are preserved.
    ///
    /// # Errors
    ///
    /// - `Validation` if a changed field is blank
    /// - `NotFound` if no record carries `key`
    pub fn update(&mut self, key: RegistrationNumber, changes: RecordChanges) -> RosterResult<()> {
        if let Err(e) = changes.validate() {
            tracing::debug!(target: "roster::store", %key, error = %e, "update rejected");
            return Err(e);
        }
        match self.records.iter_mut().find(|r| r.key() == key) {
            Some(record) => {
                record.apply(changes);
                tracing::debug!(target: "roster::store", %key, "record updated");
                Ok(())
            }
            None => {
                tracing::debug!(target: "roster::store", %key, "update rejected: not found");
                Err(RosterError::NotFound { key })
            }
        }
    }

    /// Remove the record addressed by `key`
    ///
    /// Deleting an absent key is a successful no-op. Returns whether a record
    /// was removed.
    pub fn delete(&mut self, key: RegistrationNumber) -> RosterResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.key() != key);
        let removed = self.records.len() != before;
        tracing::debug!(target: "roster::store", %key, removed, "delete");
        Ok(removed)
    }

    /// Read-only view of all records in display order
    pub fn list(&self) -> &[Record] {
        &self.records
    }

    /// Record addressed by `key`, if any
    pub fn get(&self, key: RegistrationNumber) -> Option<&Record> {
        self.records.iter().find(|r| r.key() == key)
    }

    /// Whether a record carries `key`
    pub fn contains(&self, key: RegistrationNumber) -> bool {
        self.get(key).is_some()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
