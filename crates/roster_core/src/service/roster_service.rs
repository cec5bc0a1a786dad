//! Roster session service.
//!
//! # Responsibility
//! - Own the store, the search box text and the modal for one session.
//! - Turn user actions (search, add, edit, delete, save, cancel) into store
//!   and modal transitions.
//!
//! # Invariants
//! - Deletion happens only after `Confirm::confirm` returns `true`.
//! - Submit commits the buffer and closes the modal in one step.
//! - Log events carry identifiers and counts, never record contents.

use crate::form::modal::{FormError, FormField, Modal, ModalState, Submission};
use crate::model::student::{StudentDraft, StudentId, StudentRecord};
use crate::search::filter::{filter_students, SearchQuery};
use crate::store::student_store::StudentStore;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Prompt shown before a record is removed.
pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this student?";

pub type RosterResult<T> = Result<T, RosterError>;

/// Service error for roster actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Form edit could not be applied.
    Form(FormError),
    /// Target record does not exist.
    StudentNotFound(StudentId),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form(err) => write!(f, "{err}"),
            Self::StudentNotFound(id) => write!(f, "student not found: {id}"),
        }
    }
}

impl Error for RosterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Form(err) => Some(err),
            Self::StudentNotFound(_) => None,
        }
    }
}

impl From<FormError> for RosterError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

/// Blocking yes/no prompt used to gate destructive actions.
pub trait Confirm {
    /// Returns `true` when the user accepts `message`.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// Outcome of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed and removed.
    Deleted(StudentRecord),
    /// User declined; nothing changed.
    Cancelled,
}

/// Outcome of a modal submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New record appended with the assigned id.
    Created(StudentId),
    /// Existing record overwritten.
    Updated(StudentId),
    /// Edit target disappeared before submit; nothing changed.
    Unchanged(StudentId),
}

/// Single-session roster facade over a store implementation.
pub struct RosterService<S: StudentStore> {
    store: S,
    search: SearchQuery,
    modal: Modal,
}

impl<S: StudentStore> RosterService<S> {
    /// Creates a session with empty search text and a closed modal.
    pub fn new(store: S) -> Self {
        Self {
            store,
            search: SearchQuery::default(),
            modal: Modal::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn search(&self) -> &SearchQuery {
        &self.search
    }

    /// Replaces the search box text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = SearchQuery::new(text);
        debug!(
            "event=search_set module=service status=ok query_len={}",
            self.search.text.chars().count()
        );
    }

    /// Returns the records matching the current search, in store order.
    pub fn visible_students(&self) -> Vec<&StudentRecord> {
        filter_students(self.store.list(), &self.search)
    }

    /// Opens the modal for a new record with a reset buffer.
    pub fn open_create(&mut self) {
        self.modal.open_create();
        debug!("event=modal_open module=service status=ok mode=create");
    }

    /// Opens the modal pre-populated from the record with `id`.
    ///
    /// # Errors
    /// - `StudentNotFound` when `id` is not in the store.
    pub fn open_edit(&mut self, id: StudentId) -> RosterResult<()> {
        let record = self
            .store
            .get(id)
            .ok_or(RosterError::StudentNotFound(id))?;
        self.modal.open_edit(record);
        debug!("event=modal_open module=service status=ok mode=edit id={id}");
        Ok(())
    }

    /// Applies one input change to the open form.
    pub fn set_field(&mut self, field: FormField, value: &str) -> RosterResult<()> {
        self.modal.set_field(field, value)?;
        debug!(
            "event=form_field_set module=service status=ok field={}",
            field.key()
        );
        Ok(())
    }

    /// Closes the modal and discards the buffer.
    pub fn cancel(&mut self) {
        let closed = self.modal.cancel();
        debug!(
            "event=modal_cancel module=service status=ok mode={}",
            mode_name(closed)
        );
    }

    /// Commits the buffer to the store and closes the modal.
    ///
    /// # Errors
    /// - `Form(ModalClosed)` when no modal is open.
    pub fn submit(&mut self) -> RosterResult<SubmitOutcome> {
        let outcome = match self.modal.submit()? {
            Submission::Create(draft) => SubmitOutcome::Created(self.create_student(draft)),
            Submission::Update(id, draft) => {
                if self.store.replace(id, draft) {
                    SubmitOutcome::Updated(id)
                } else {
                    SubmitOutcome::Unchanged(id)
                }
            }
        };

        match outcome {
            SubmitOutcome::Created(id) => info!(
                "event=student_create module=service status=ok id={id} count={}",
                self.store.len()
            ),
            SubmitOutcome::Updated(id) => {
                info!("event=student_update module=service status=ok id={id}")
            }
            SubmitOutcome::Unchanged(id) => {
                warn!("event=student_update module=service status=skipped id={id} reason=missing")
            }
        }
        Ok(outcome)
    }

    /// Appends `draft` directly, bypassing the modal.
    pub fn create_student(&mut self, draft: StudentDraft) -> StudentId {
        self.store.append(draft)
    }

    /// Removes the record with `id` once `confirm` accepts.
    ///
    /// # Errors
    /// - `StudentNotFound` when `id` is not in the store. The prompt is not
    ///   shown in that case.
    pub fn delete_student(
        &mut self,
        id: StudentId,
        confirm: &mut impl Confirm,
    ) -> RosterResult<DeleteOutcome> {
        if self.store.get(id).is_none() {
            return Err(RosterError::StudentNotFound(id));
        }

        if !confirm.confirm(DELETE_CONFIRM_PROMPT) {
            debug!("event=student_delete module=service status=cancelled id={id}");
            return Ok(DeleteOutcome::Cancelled);
        }

        let removed = self
            .store
            .remove(id)
            .ok_or(RosterError::StudentNotFound(id))?;
        info!(
            "event=student_delete module=service status=ok id={id} count={}",
            self.store.len()
        );
        Ok(DeleteOutcome::Deleted(removed))
    }
}

fn mode_name(state: ModalState) -> &'static str {
    match state {
        ModalState::Closed => "closed",
        ModalState::Creating => "create",
        ModalState::Editing(_) => "edit",
    }
}
