use std::fs;

use studynotes::{export_notes, render_html, render_json, render_markdown, Note, NoteError, NoteStore};

fn seeded_store() -> NoteStore {
    let mut store = NoteStore::new();
    store
        .create("Algebra Formulas", "Mathematics", "x = 1\n\ny = 2")
        .unwrap();
    store
        .create("Indian Constitution", "History", "Adopted in 1949")
        .unwrap();
    store
}

fn all_notes(store: &NoteStore) -> Vec<&Note> {
    store.get_all().iter().collect()
}

#[test]
fn markdown_document_contains_each_note() {
    let store = seeded_store();
    let doc = render_markdown(&all_notes(&store));

    assert!(doc.contains("# Algebra Formulas"));
    assert!(doc.contains("# Indian Constitution"));
    assert!(doc.contains("Adopted in 1949"));
    // One separator between the two notes
    assert_eq!(doc.matches("\n---\n").count(), 1);
}

#[test]
fn json_document_round_trips_note_fields() {
    let store = seeded_store();
    let doc = render_json(&all_notes(&store)).unwrap();

    let parsed: Vec<Note> = serde_json::from_str(&doc).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].id, 1);
    assert_eq!(parsed[0].subject, "Mathematics");
    assert_eq!(parsed[1].title, "Indian Constitution");
    assert_eq!(parsed, store.get_all().to_vec());
}

#[test]
fn html_document_renders_titles_as_headings() {
    let store = seeded_store();
    let doc = render_html(&all_notes(&store));

    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<h1>Algebra Formulas</h1>"));
    assert!(doc.contains("<h1>Indian Constitution</h1>"));
}

#[test]
fn export_writes_requested_format_to_disk() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();

    let md_path = dir.path().join("notes.md");
    export_notes(&all_notes(&store), "markdown", &md_path).unwrap();
    let written = fs::read_to_string(&md_path).unwrap();
    assert!(written.contains("# Algebra Formulas"));

    let json_path = dir.path().join("notes.json");
    export_notes(&all_notes(&store), "json", &json_path).unwrap();
    let parsed: Vec<Note> = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn export_accepts_md_alias_and_mixed_case() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("alias.md");
    export_notes(&all_notes(&store), "MD", &path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("# Algebra Formulas"));
}

#[test]
fn export_rejects_unknown_format() {
    let store = seeded_store();
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("notes.pdf");
    let err = export_notes(&all_notes(&store), "pdf", &path).unwrap_err();
    assert!(matches!(err, NoteError::InvalidFormat { .. }));
    assert!(!path.exists());
}
