//! Case-insensitive substring filter over student records.
//!
//! # Responsibility
//! - Match search text against name, student number, email and major.
//!
//! # Invariants
//! - Empty search text matches every record.
//! - Output order equals input (store) order; there is no ranking.
//! - Output is recomputed per call and never cached.

use crate::model::student::StudentRecord;

/// Search box state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    /// Raw text as typed. Not trimmed.
    pub text: String,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns whether this query lets every record through.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn needle(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Returns records matching `query`, preserving store order.
pub fn filter_students<'a>(
    records: &'a [StudentRecord],
    query: &SearchQuery,
) -> Vec<&'a StudentRecord> {
    if query.is_empty() {
        return records.iter().collect();
    }

    let needle = query.needle();
    records
        .iter()
        .filter(|record| matches_needle(record, &needle))
        .collect()
}

/// Returns whether `record` matches `query` on any searched field.
pub fn matches_student(record: &StudentRecord, query: &SearchQuery) -> bool {
    matches_needle(record, &query.needle())
}

fn matches_needle(record: &StudentRecord, needle: &str) -> bool {
    searched_fields(record)
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn searched_fields(record: &StudentRecord) -> [&str; 4] {
    [
        record.name.as_str(),
        record.student_id.as_str(),
        record.email.as_str(),
        record.major.as_str(),
    ]
}
