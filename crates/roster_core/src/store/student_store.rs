//! Student store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide the record operations behind the roster session.
//! - Assign identifiers on append.
//!
//! # Invariants
//! - New identifier = (max live identifier, or 0) + 1.
//! - `replace` on an absent identifier changes nothing.
//! - `remove` is unconditional; confirmation belongs to the caller.

use crate::model::student::{StudentDraft, StudentId, StudentRecord};

/// Record store interface used by the roster service.
pub trait StudentStore {
    /// Assigns an identifier, appends the record at the end, returns the id.
    fn append(&mut self, draft: StudentDraft) -> StudentId;
    /// Overwrites every field of the record with `id`, keeping its position.
    ///
    /// Returns `false` (and changes nothing) when `id` is absent.
    fn replace(&mut self, id: StudentId, draft: StudentDraft) -> bool;
    /// Removes and returns the record with `id`, if present.
    fn remove(&mut self, id: StudentId) -> Option<StudentRecord>;
    /// Returns one record by id.
    fn get(&self, id: StudentId) -> Option<&StudentRecord>;
    /// Returns all records in insertion order.
    fn list(&self) -> &[StudentRecord];

    fn len(&self) -> usize {
        self.list().len()
    }

    fn is_empty(&self) -> bool {
        self.list().is_empty()
    }
}

/// Vec-backed store living for one session.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentStore {
    records: Vec<StudentRecord>,
}

impl InMemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store by appending `drafts` in order.
    pub fn with_students(drafts: impl IntoIterator<Item = StudentDraft>) -> Self {
        let mut store = Self::new();
        for draft in drafts {
            store.append(draft);
        }
        store
    }

    fn next_id(&self) -> StudentId {
        self.records
            .iter()
            .map(|record| record.id)
            .max()
            .unwrap_or(0)
            + 1
    }

    fn position(&self, id: StudentId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl StudentStore for InMemoryStudentStore {
    fn append(&mut self, draft: StudentDraft) -> StudentId {
        let id = self.next_id();
        self.records.push(draft.into_record(id));
        id
    }

    fn replace(&mut self, id: StudentId, draft: StudentDraft) -> bool {
        match self.position(id) {
            Some(index) => {
                self.records[index] = draft.into_record(id);
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: StudentId) -> Option<StudentRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    fn get(&self, id: StudentId) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn list(&self) -> &[StudentRecord] {
        &self.records
    }
}
