use roster_cli::run_session;
use roster_core::{seeded_session, InMemoryStudentStore, RosterService, StudentStore};
use std::io::Cursor;

fn run<S: StudentStore>(service: &mut RosterService<S>, script: &str) -> String {
    run_bytes(service, script.as_bytes())
}

fn run_bytes<S: StudentStore>(service: &mut RosterService<S>, script: &[u8]) -> String {
    let mut input = Cursor::new(script.to_vec());
    let mut output = Vec::new();
    run_session(service, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn initial_page_shows_sample_cards() {
    let mut service = seeded_session();
    let output = run(&mut service, "quit\n");
    assert!(output.contains("Student Database"));
    assert!(output.contains("[#1] Alex Chen (STU001)"));
    assert!(output.contains("[#2] Maria Garcia (STU002)"));
}

#[test]
fn search_physics_renders_only_maria() {
    let mut service = seeded_session();
    let output = run(&mut service, "search Physics\nquit\n");

    let after_search = output.rsplit("Search: Physics").next().unwrap();
    assert!(after_search.contains("Maria Garcia"));
    assert!(!after_search.contains("Alex Chen"));
}

#[test]
fn add_flow_creates_student_three() {
    let mut service = seeded_session();
    let output = run(
        &mut service,
        "add\nset name Sam Lee\nset studentId STU003\nset year Senior\nsave\n",
    );

    assert!(output.contains("Add New Student"));
    assert!(output.contains("Added student #3."));
    let record = service.store().get(3).unwrap();
    assert_eq!(record.name, "Sam Lee");
    assert_eq!(record.student_id, "STU003");
    assert_eq!(service.store().len(), 3);
    assert!(!service.modal().is_open());
}

#[test]
fn edit_flow_updates_in_place() {
    let mut service = seeded_session();
    let output = run(&mut service, "edit 2\nset major Astronomy\nsave\nquit\n");

    assert!(output.contains("Edit Student"));
    assert!(output.contains("Updated student #2."));
    assert_eq!(service.store().get(2).unwrap().major, "Astronomy");
    assert_eq!(service.store().len(), 2);
}

#[test]
fn delete_requires_yes() {
    let mut service = seeded_session();
    let output = run(&mut service, "delete 2\nn\ndelete 1\ny\n");

    assert!(output.contains("Are you sure you want to delete this student? [y/N]"));
    assert!(output.contains("Delete cancelled."));
    assert!(output.contains("Deleted student #1."));
    let ids: Vec<_> = service.store().list().iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![2]);
}

#[test]
fn delete_prompt_at_end_of_input_declines() {
    let mut service = seeded_session();
    let output = run(&mut service, "delete 1\n");
    assert!(output.contains("Delete cancelled."));
    assert_eq!(service.store().len(), 2);
}

#[test]
fn cancel_discards_form() {
    let mut service = seeded_session();
    run(&mut service, "add\nset name Nobody\ncancel\nsave\n");
    assert_eq!(service.store().len(), 2);
    assert!(!service.modal().is_open());
}

#[test]
fn errors_are_reported_and_loop_continues() {
    let mut service = seeded_session();
    let output = run(
        &mut service,
        "frobnicate\nedit 9\nset name X\nadd\nset year Graduate\nsave\n",
    );

    assert!(output.contains("error: unknown command `frobnicate`"));
    assert!(output.contains("error: student not found: 9"));
    assert!(output.contains("error: no student form is open"));
    assert!(output.contains("error: invalid year `Graduate`"));
    assert!(output.contains("Added student #3."));
}

#[test]
fn json_prints_visible_students() {
    let mut service = seeded_session();
    let output = run(&mut service, "search stu001\njson\nquit\n");

    let start = output.find("roster> [").unwrap() + "roster> ".len();
    let json_text = &output[start..];
    let end = json_text.find("\n]").unwrap() + 2;
    let value: serde_json::Value = serde_json::from_str(&json_text[..end]).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["studentId"], "STU001");
}

#[test]
fn empty_roster_shows_empty_state() {
    let mut service = RosterService::new(InMemoryStudentStore::new());
    let output = run(&mut service, "");
    assert!(output.contains("No students found in the cosmos..."));
}

#[test]
fn invalid_utf8_line_does_not_end_session() {
    let mut service = seeded_session();
    let output = run_bytes(&mut service, b"search caf\xe9\nsearch\ndelete 1\ny\nquit\n");

    assert!(output.contains("Search: caf\u{FFFD}"));
    assert!(output.contains("Deleted student #1."));
    assert_eq!(service.store().len(), 1);
    assert!(service.store().get(1).is_none());
}

#[test]
fn saving_edit_of_deleted_student_is_silent() {
    let mut service = seeded_session();
    let output = run(&mut service, "edit 2\ndelete 2\ny\nsave\nquit\n");

    assert!(output.contains("Deleted student #2."));
    assert!(!output.contains("Updated student"));
    assert!(!output.contains("no longer exists"));
    assert!(!output.contains("error:"));
    assert_eq!(service.store().len(), 1);
    assert!(service.store().get(2).is_none());
    assert!(!service.modal().is_open());
}
