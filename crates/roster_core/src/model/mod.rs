//! Domain model for the student roster.
//!
//! # Responsibility
//! - Define the canonical record shape rendered by cards and edited by the
//!   modal form.
//! - Keep the staging (draft) shape aligned with the stored shape.
//!
//! # Invariants
//! - Every stored record is identified by a store-assigned `StudentId`.
//! - Deletion is a hard delete; there is no tombstone state.

pub mod student;
