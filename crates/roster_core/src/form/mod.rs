//! Create/edit form state.
//!
//! # Responsibility
//! - Own the single staging buffer bound to the modal inputs.
//! - Model modal visibility as an explicit tagged state.
//!
//! # Invariants
//! - The buffer is reset whenever the modal closes.
//! - Edit mode tracks the target identifier outside the buffer.

pub mod modal;
