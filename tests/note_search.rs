use studynotes::NoteStore;

fn seeded_store() -> NoteStore {
    let mut store = NoteStore::new();
    store
        .create("Algebra Formulas", "Mathematics", "Quadratic formula notes")
        .unwrap();
    store
        .create("Indian Constitution", "History", "Adopted in 1949")
        .unwrap();
    store
        .create("Newton's Laws", "Science", "Laws of motion and force")
        .unwrap();
    store
}

#[test]
fn search_is_case_insensitive_across_all_fields() {
    let store = seeded_store();

    // Subject match, both casings
    let upper = store.search("MATH");
    assert_eq!(upper.len(), 1);
    assert_eq!(upper[0].title, "Algebra Formulas");

    let lower = store.search("mathematics");
    assert_eq!(lower.len(), 1);
    assert_eq!(lower[0].title, "Algebra Formulas");

    // Title match
    let by_title = store.search("constitution");
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].subject, "History");

    // Content match
    let by_content = store.search("MOTION");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].title, "Newton's Laws");
}

#[test]
fn blank_search_returns_all_in_insertion_order() {
    let store = seeded_store();

    for term in ["", "   "] {
        let all = store.search(term);
        assert_eq!(all.len(), 3);
        let ids: Vec<u64> = all.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

#[test]
fn search_preserves_store_order_among_matches() {
    let mut store = NoteStore::new();
    store.create("laws of algebra", "Mathematics", "x").unwrap();
    store.create("Indian Constitution", "History", "y").unwrap();
    store.create("Newton's Laws", "Science", "z").unwrap();

    let matches = store.search("laws");
    let ids: Vec<u64> = matches.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn search_reflects_update_reordering() {
    let mut store = seeded_store();
    store
        .update(1, "Algebra Formulas", "Mathematics", "refreshed")
        .unwrap();

    let all = store.search("");
    let ids: Vec<u64> = all.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn filter_by_subject_is_exact_and_case_sensitive() {
    let store = seeded_store();

    let exact = store.filter_by_subject("Mathematics");
    assert_eq!(exact.len(), 1);

    // Neither a different casing nor a prefix matches
    assert!(store.filter_by_subject("mathematics").is_empty());
    assert!(store.filter_by_subject("Math").is_empty());
}

#[test]
fn filter_by_tag_matches_title_and_content_but_not_subject() {
    let mut store = NoteStore::new();
    store
        .create("Physics revision", "Science", "velocity and momentum")
        .unwrap();
    store.create("Geometry", "Mathematics", "circles").unwrap();

    // "science" appears only in the subject field of note 1
    assert!(store.filter_by_tag("science").is_empty());

    // Case-insensitive content match
    let by_content = store.filter_by_tag("MOMENTUM");
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].title, "Physics revision");

    // Case-insensitive title match
    let by_title = store.filter_by_tag("geometry");
    assert_eq!(by_title.len(), 1);
}

#[test]
fn count_by_subject_counts_distinct_subject_strings() {
    let mut store = NoteStore::new();
    store.create("A", "Math", "x").unwrap();
    store.create("B", "Math", "y").unwrap();
    store.create("C", "History", "z").unwrap();

    let counts = store.count_by_subject();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts["Math"], 2);
    assert_eq!(counts["History"], 1);
}

#[test]
fn stats_reports_totals_and_distinct_subjects() {
    let mut store = NoteStore::new();
    store.create("A", "Math", "x").unwrap();
    store.create("B", "Math", "y").unwrap();
    store.create("C", "History", "z").unwrap();

    let stats = store.stats();
    assert_eq!(stats.total_notes, 3);
    assert_eq!(stats.distinct_subjects, 2);

    let empty = NoteStore::new();
    assert_eq!(empty.stats().total_notes, 0);
    assert_eq!(empty.stats().distinct_subjects, 0);
}

#[test]
fn get_all_reflects_current_order() {
    let mut store = seeded_store();
    store.delete(2).unwrap();

    let ids: Vec<u64> = store.get_all().iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![1, 3]);
}
