//! Text renderers for header, cards and modal.
//!
//! # Invariants
//! - Card rows appear in a fixed order: Email, Phone, DOB, Major, Year, GPA,
//!   Enrolled.
//! - An empty result renders the empty-state line instead of cards.
//! - A closed modal renders nothing.

use crate::form::modal::{FormField, InputKind, Modal, ModalState};
use crate::model::student::{AcademicYear, StudentRecord};
use crate::service::roster_service::RosterService;
use crate::store::student_store::StudentStore;

pub const PAGE_TITLE: &str = "Student Database";
pub const PAGE_SUBTITLE: &str = "Exploring the Universe of Knowledge";
pub const SEARCH_PLACEHOLDER: &str = "Search students by name, ID, email, or major...";
pub const EMPTY_RESULTS: &str = "No students found in the cosmos...";

const CARD_LABEL_WIDTH: usize = 9;
const RULE_WIDTH: usize = 48;

/// Renders the page title block.
pub fn render_header() -> String {
    format!("{PAGE_TITLE}\n{PAGE_SUBTITLE}\n")
}

/// Renders one record card.
pub fn render_card(record: &StudentRecord) -> String {
    let year = record.year.map(AcademicYear::label).unwrap_or("");
    let rows: [(&str, &str); 7] = [
        ("Email:", record.email.as_str()),
        ("Phone:", record.phone.as_str()),
        ("DOB:", record.dob.as_str()),
        ("Major:", record.major.as_str()),
        ("Year:", year),
        ("GPA:", record.gpa.as_str()),
        ("Enrolled:", record.enrollment_date.as_str()),
    ];

    let mut lines = vec![format!(
        "[#{}] {} ({})",
        record.id, record.name, record.student_id
    )];
    lines.extend(
        rows.iter()
            .map(|(label, value)| format!("  {label:<CARD_LABEL_WIDTH$} {value}")),
    );
    join_lines(&lines)
}

/// Renders every card separated by blank lines, or the empty-state line.
pub fn render_cards(records: &[&StudentRecord]) -> String {
    if records.is_empty() {
        return format!("{EMPTY_RESULTS}\n");
    }
    records
        .iter()
        .map(|record| render_card(record))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the modal bound to the form buffer; empty when closed.
pub fn render_modal(modal: &Modal) -> String {
    let (title, submit_label) = match modal.state() {
        ModalState::Closed => return String::new(),
        ModalState::Creating => ("Add New Student", "Add Student"),
        ModalState::Editing(_) => ("Edit Student", "Update Student"),
    };

    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![rule.clone(), title.to_string(), rule.clone()];
    lines.extend(FormField::ALL.into_iter().map(|field| {
        let marker = if field.is_required() { " *" } else { "" };
        let value = field.read(modal.buffer());
        let shown = match (field.input_kind(), value.is_empty()) {
            (InputKind::Select, true) => "Select Year",
            _ => value,
        };
        let label = format!("{}{marker}", field.label());
        format!("  {label:<18} [{}] {shown}", field.key())
    }));
    lines.push(rule);
    lines.push(format!("[save] {submit_label}   [cancel] Cancel"));
    join_lines(&lines)
}

/// Renders the whole page for the current session state.
pub fn render_page<S: StudentStore>(service: &RosterService<S>) -> String {
    let mut out = render_header();
    let search = &service.search().text;
    if search.is_empty() {
        out.push_str(&format!("Search: ({SEARCH_PLACEHOLDER})\n\n"));
    } else {
        out.push_str(&format!("Search: {search}\n\n"));
    }
    out.push_str(&render_cards(&service.visible_students()));

    let modal = render_modal(service.modal());
    if !modal.is_empty() {
        out.push('\n');
        out.push_str(&modal);
    }
    out
}

fn join_lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
