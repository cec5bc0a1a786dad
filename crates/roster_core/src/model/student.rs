//! Student domain model.
//!
//! # Responsibility
//! - Define the stored record (`StudentRecord`) and its staging shape
//!   (`StudentDraft`) used by the create/edit form.
//! - Define the closed `AcademicYear` enumeration and its display labels.
//!
//! # Invariants
//! - `StudentDraft` carries every `StudentRecord` field except `id`.
//! - Field contents are free text; only `year` is a closed set.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned, process-local identifier.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type StudentId = u64;

/// Academic standing offered by the year selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcademicYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl AcademicYear {
    /// All selectable years in selector order.
    pub const ALL: [AcademicYear; 4] = [
        AcademicYear::Freshman,
        AcademicYear::Sophomore,
        AcademicYear::Junior,
        AcademicYear::Senior,
    ];

    /// Returns the label shown by the selector and on cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Freshman => "Freshman",
            Self::Sophomore => "Sophomore",
            Self::Junior => "Junior",
            Self::Senior => "Senior",
        }
    }

    /// Parses a selector label, ignoring ASCII case and surrounding spaces.
    pub fn parse_label(value: &str) -> Option<Self> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|year| year.label().eq_ignore_ascii_case(normalized))
    }
}

impl Display for AcademicYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical stored student record.
///
/// Serialized with camelCase keys (`studentId`, `enrollmentDate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    /// Store-assigned identifier, unique among live records.
    pub id: StudentId,
    pub name: String,
    /// External-facing student number. Uniqueness is not enforced.
    pub student_id: String,
    pub email: String,
    pub phone: String,
    /// Date of birth as entered (`YYYY-MM-DD` from the date input).
    pub dob: String,
    pub major: String,
    /// `None` when submitted without a selection.
    pub year: Option<AcademicYear>,
    /// Free text; never parsed as a number.
    pub gpa: String,
    pub enrollment_date: String,
}

impl StudentRecord {
    /// Copies every field except `id` into a fresh draft.
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            name: self.name.clone(),
            student_id: self.student_id.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            dob: self.dob.clone(),
            major: self.major.clone(),
            year: self.year,
            gpa: self.gpa.clone(),
            enrollment_date: self.enrollment_date.clone(),
        }
    }
}

/// Record shape without identifier, staged by the create/edit form.
///
/// `Default` is the reset state: empty strings and no year selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub name: String,
    pub student_id: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub major: String,
    pub year: Option<AcademicYear>,
    pub gpa: String,
    pub enrollment_date: String,
}

impl StudentDraft {
    /// Attaches an identifier, producing a storable record.
    pub fn into_record(self, id: StudentId) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            student_id: self.student_id,
            email: self.email,
            phone: self.phone,
            dob: self.dob,
            major: self.major,
            year: self.year,
            gpa: self.gpa,
            enrollment_date: self.enrollment_date,
        }
    }

    /// Returns whether every field is still in its reset state.
    pub fn is_blank(&self) -> bool {
        self == &Self::default()
    }
}

/// Sample roster loaded into a fresh session.
///
/// Appended in order, these receive identifiers 1 and 2.
pub fn sample_students() -> Vec<StudentDraft> {
    vec![
        StudentDraft {
            name: "Alex Chen".to_string(),
            student_id: "STU001".to_string(),
            email: "alex.chen@university.edu".to_string(),
            phone: "+1 234-567-8901".to_string(),
            dob: "2003-05-15".to_string(),
            major: "Computer Science".to_string(),
            year: Some(AcademicYear::Sophomore),
            gpa: "3.8".to_string(),
            enrollment_date: "2022-09-01".to_string(),
        },
        StudentDraft {
            name: "Maria Garcia".to_string(),
            student_id: "STU002".to_string(),
            email: "maria.garcia@university.edu".to_string(),
            phone: "+1 234-567-8902".to_string(),
            dob: "2002-11-20".to_string(),
            major: "Physics".to_string(),
            year: Some(AcademicYear::Junior),
            gpa: "3.9".to_string(),
            enrollment_date: "2021-09-01".to_string(),
        },
    ]
}
