//! Modal form state machine and its nine input fields.
//!
//! # Responsibility
//! - Describe the form inputs (label, input kind, required marker).
//! - Apply field edits to the staging buffer.
//! - Hand the buffer over on submit and reset it on close.
//!
//! # Invariants
//! - States: `Closed`, `Creating`, `Editing(id)`.
//! - Field edits are rejected while `Closed`.
//! - `required` is advisory; no value is validated except the year label.

use crate::model::student::{AcademicYear, StudentDraft, StudentId, StudentRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type FormResult<T> = Result<T, FormError>;

/// Form-level error for edits that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// An edit or submit arrived while no modal is open.
    ModalClosed,
    /// Year value is not one of the selector labels.
    InvalidYear(String),
    /// Field key does not name one of the form inputs.
    UnknownField(String),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ModalClosed => write!(f, "no student form is open"),
            Self::InvalidYear(value) => write!(
                f,
                "invalid year `{value}`; expected Freshman|Sophomore|Junior|Senior"
            ),
            Self::UnknownField(key) => write!(f, "unknown form field `{key}`"),
        }
    }
}

impl Error for FormError {}

/// HTML-style input widget kind for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Date,
    Select,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Date => "date",
            Self::Select => "select",
        }
    }
}

/// One of the nine modal inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    StudentId,
    Email,
    Phone,
    Dob,
    Major,
    Year,
    Gpa,
    EnrollmentDate,
}

impl FormField {
    /// All inputs in display order.
    pub const ALL: [FormField; 9] = [
        FormField::Name,
        FormField::StudentId,
        FormField::Email,
        FormField::Phone,
        FormField::Dob,
        FormField::Major,
        FormField::Year,
        FormField::Gpa,
        FormField::EnrollmentDate,
    ];

    /// Record key, matching the serialized camelCase name.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::StudentId => "studentId",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Dob => "dob",
            Self::Major => "major",
            Self::Year => "year",
            Self::Gpa => "gpa",
            Self::EnrollmentDate => "enrollmentDate",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::StudentId => "Student ID",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Dob => "Date of Birth",
            Self::Major => "Major",
            Self::Year => "Year",
            Self::Gpa => "GPA",
            Self::EnrollmentDate => "Enrollment Date",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Phone => InputKind::Tel,
            Self::Dob | Self::EnrollmentDate => InputKind::Date,
            Self::Year => InputKind::Select,
            Self::Name | Self::StudentId | Self::Major | Self::Gpa => InputKind::Text,
        }
    }

    /// Every input carries the widget-level required marker.
    pub fn is_required(self) -> bool {
        true
    }

    /// Parses a field key; case, `_` and `-` are ignored (`student_id`,
    /// `studentId` and `STUDENT-ID` all resolve to `StudentId`).
    pub fn parse_key(value: &str) -> FormResult<Self> {
        let normalized = normalize_key(value);
        Self::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == normalized)
            .ok_or_else(|| FormError::UnknownField(value.trim().to_string()))
    }

    /// Reads this field's current value from `draft` as display text.
    pub fn read(self, draft: &StudentDraft) -> &str {
        match self {
            Self::Name => draft.name.as_str(),
            Self::StudentId => draft.student_id.as_str(),
            Self::Email => draft.email.as_str(),
            Self::Phone => draft.phone.as_str(),
            Self::Dob => draft.dob.as_str(),
            Self::Major => draft.major.as_str(),
            Self::Year => draft.year.map(AcademicYear::label).unwrap_or(""),
            Self::Gpa => draft.gpa.as_str(),
            Self::EnrollmentDate => draft.enrollment_date.as_str(),
        }
    }

    fn write(self, draft: &mut StudentDraft, value: &str) -> FormResult<()> {
        let slot = match self {
            Self::Year => {
                draft.year = parse_year_selection(value)?;
                return Ok(());
            }
            Self::Name => &mut draft.name,
            Self::StudentId => &mut draft.student_id,
            Self::Email => &mut draft.email,
            Self::Phone => &mut draft.phone,
            Self::Dob => &mut draft.dob,
            Self::Major => &mut draft.major,
            Self::Gpa => &mut draft.gpa,
            Self::EnrollmentDate => &mut draft.enrollment_date,
        };
        *slot = value.to_string();
        Ok(())
    }
}

/// Visibility and mode of the modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Creating,
    Editing(StudentId),
}

/// Buffer handed over by a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(StudentDraft),
    Update(StudentId, StudentDraft),
}

/// Modal form bound to one staging buffer.
#[derive(Debug, Clone, Default)]
pub struct Modal {
    state: ModalState,
    buffer: StudentDraft,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    pub fn buffer(&self) -> &StudentDraft {
        &self.buffer
    }

    /// Opens for create with a reset buffer. Any open buffer is discarded.
    pub fn open_create(&mut self) {
        self.buffer = StudentDraft::default();
        self.state = ModalState::Creating;
    }

    /// Opens for edit with the buffer copied from `record`.
    pub fn open_edit(&mut self, record: &StudentRecord) {
        self.buffer = record.to_draft();
        self.state = ModalState::Editing(record.id);
    }

    /// Applies one input change to the buffer.
    ///
    /// # Errors
    /// - `ModalClosed` when no modal is open.
    /// - `InvalidYear` when `field` is `Year` and `value` is neither empty
    ///   nor a selector label.
    pub fn set_field(&mut self, field: FormField, value: &str) -> FormResult<()> {
        if !self.is_open() {
            return Err(FormError::ModalClosed);
        }
        field.write(&mut self.buffer, value)
    }

    /// Closes the modal and discards the buffer.
    ///
    /// Returns the state that was closed.
    pub fn cancel(&mut self) -> ModalState {
        self.close()
    }

    /// Closes the modal and hands the buffer over for commit.
    ///
    /// # Errors
    /// - `ModalClosed` when no modal is open.
    pub fn submit(&mut self) -> FormResult<Submission> {
        let draft = std::mem::take(&mut self.buffer);
        match self.close() {
            ModalState::Closed => Err(FormError::ModalClosed),
            ModalState::Creating => Ok(Submission::Create(draft)),
            ModalState::Editing(id) => Ok(Submission::Update(id, draft)),
        }
    }

    fn close(&mut self) -> ModalState {
        self.buffer = StudentDraft::default();
        std::mem::take(&mut self.state)
    }
}

fn parse_year_selection(value: &str) -> FormResult<Option<AcademicYear>> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    AcademicYear::parse_label(value)
        .map(Some)
        .ok_or_else(|| FormError::InvalidYear(value.trim().to_string()))
}

fn normalize_key(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| *ch != '_' && *ch != '-')
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{normalize_key, parse_year_selection, FormError};
    use crate::model::student::AcademicYear;

    #[test]
    fn normalize_key_drops_separators_and_case() {
        assert_eq!(normalize_key(" Enrollment_Date "), "enrollmentdate");
        assert_eq!(normalize_key("student-id"), "studentid");
    }

    #[test]
    fn blank_year_clears_selection() {
        assert_eq!(parse_year_selection("  ").unwrap(), None);
        assert_eq!(
            parse_year_selection("senior").unwrap(),
            Some(AcademicYear::Senior)
        );
        assert_eq!(
            parse_year_selection("Grad").unwrap_err(),
            FormError::InvalidYear("Grad".to_string())
        );
    }
}
