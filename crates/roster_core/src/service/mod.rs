//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, filter and form calls into user-action APIs.
//! - Keep front ends decoupled from store details.

pub mod roster_service;
