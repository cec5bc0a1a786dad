//! Plain-text presentation of the roster page.
//!
//! # Responsibility
//! - Render cards for visible records and the modal bound to the form buffer.
//! - Stay free of state changes; every function is a pure projection.

pub mod render;
