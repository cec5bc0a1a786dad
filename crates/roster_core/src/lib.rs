//! Core domain logic for the student roster.
//! This crate owns every roster invariant; front ends only forward user
//! actions and print rendered pages.

pub mod form;
pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;
pub mod view;

pub use form::modal::{FormError, FormField, FormResult, InputKind, Modal, ModalState, Submission};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::student::{sample_students, AcademicYear, StudentDraft, StudentId, StudentRecord};
pub use search::filter::{filter_students, matches_student, SearchQuery};
pub use service::roster_service::{
    Confirm, DeleteOutcome, RosterError, RosterResult, RosterService, SubmitOutcome,
    DELETE_CONFIRM_PROMPT,
};
pub use store::student_store::{InMemoryStudentStore, StudentStore};
pub use view::render::{render_card, render_cards, render_header, render_modal, render_page};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Creates a session preloaded with the sample roster.
pub fn seeded_session() -> RosterService<InMemoryStudentStore> {
    RosterService::new(InMemoryStudentStore::with_students(sample_students()))
}
