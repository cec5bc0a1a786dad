//! Record store abstractions and implementations.
//!
//! # Responsibility
//! - Define the append/replace/remove/list contract over student records.
//! - Keep storage details out of service and view code.
//!
//! # Invariants
//! - Store order is insertion order; replacement keeps a record in place.
//! - Identifiers are assigned by the store, never by callers.

pub mod student_store;
