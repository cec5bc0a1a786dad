use roster_core::{
    filter_students, matches_student, sample_students, InMemoryStudentStore, SearchQuery,
    StudentDraft, StudentRecord, StudentStore,
};

fn seeded() -> InMemoryStudentStore {
    InMemoryStudentStore::with_students(sample_students())
}

fn ids(records: &[&StudentRecord]) -> Vec<u64> {
    records.iter().map(|record| record.id).collect()
}

#[test]
fn empty_search_returns_all_in_store_order() {
    let store = seeded();
    let visible = filter_students(store.list(), &SearchQuery::default());
    assert_eq!(ids(&visible), vec![1, 2]);
}

#[test]
fn physics_matches_major_of_second_record_only() {
    let store = seeded();
    let visible = filter_students(store.list(), &SearchQuery::new("Physics"));
    assert_eq!(ids(&visible), vec![2]);
}

#[test]
fn match_is_case_insensitive_on_each_searched_field() {
    let store = seeded();
    for (text, expected) in [
        ("alex", vec![1]),
        ("stu002", vec![2]),
        ("GARCIA@UNIVERSITY", vec![2]),
        ("computer sci", vec![1]),
        ("university.edu", vec![1, 2]),
    ] {
        let visible = filter_students(store.list(), &SearchQuery::new(text));
        assert_eq!(ids(&visible), expected, "query `{text}`");
    }
}

#[test]
fn unsearched_fields_do_not_match() {
    let store = seeded();
    for text in ["234-567", "2003-05-15", "Sophomore", "3.9"] {
        let visible = filter_students(store.list(), &SearchQuery::new(text));
        assert!(visible.is_empty(), "query `{text}` should not match");
    }
}

#[test]
fn search_text_is_not_trimmed() {
    let store = seeded();
    let visible = filter_students(store.list(), &SearchQuery::new(" Chen"));
    assert_eq!(ids(&visible), vec![1]);

    let visible = filter_students(store.list(), &SearchQuery::new("Chen "));
    assert!(visible.is_empty());
}

#[test]
fn every_hit_contains_query_and_hits_are_subset() {
    let mut store = seeded();
    store.append(StudentDraft {
        name: "Ana Lima".to_string(),
        student_id: "STU010".to_string(),
        email: "ana@college.org".to_string(),
        major: "Astrophysics".to_string(),
        ..StudentDraft::default()
    });

    for text in ["a", "phys", "STU0", "college", "e", "zzz", "@"] {
        let query = SearchQuery::new(text);
        let visible = filter_students(store.list(), &query);
        let needle = text.to_lowercase();
        for record in &visible {
            assert!(store.get(record.id).is_some());
            assert!(matches_student(record, &query));
            assert!(
                [&record.name, &record.student_id, &record.email, &record.major]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle)),
                "record {} does not contain `{text}`",
                record.id
            );
        }
        let expected = store
            .list()
            .iter()
            .filter(|record| matches_student(record, &query))
            .count();
        assert_eq!(visible.len(), expected);
    }
}
