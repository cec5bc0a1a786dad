//! Roster search entry points.
//!
//! # Responsibility
//! - Derive the visible subset of the store from the search box text.
//! - Keep match rules inside core so every front end filters the same way.

pub mod filter;
