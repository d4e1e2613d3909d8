//! In-memory note collection manager.

use std::collections::BTreeMap;

use log::{debug, info};

use crate::{Note, NoteError, Result, StoreStats};

/// Single source of truth for the session's note collection.
///
/// Owns the backing sequence; all mutation goes through the operations
/// below. Display order is insertion order, except that `update` re-appends
/// the edited note at the end.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { notes: Vec::new() }
    }

    /// Next id: 1 for an empty store, otherwise max existing id + 1.
    ///
    /// Not a monotonic counter: deleting the highest-numbered note makes
    /// its id available again.
    fn next_id(&self) -> u64 {
        self.notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1)
    }

    fn validate_fields(title: &str, subject: &str, content: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(NoteError::EmptyField { field: "title" });
        }
        if subject.trim().is_empty() {
            return Err(NoteError::EmptyField { field: "subject" });
        }
        if content.is_empty() {
            return Err(NoteError::EmptyField { field: "content" });
        }
        Ok(())
    }

    /// Creates a new note and appends it to the collection.
    ///
    /// The store assigns the id and stamps the note with today's date.
    pub fn create(&mut self, title: &str, subject: &str, content: &str) -> Result<Note> {
        Self::validate_fields(title, subject, content)?;

        let note = Note::new(
            self.next_id(),
            title.to_string(),
            subject.to_string(),
            content.to_string(),
        );
        info!("Created note {}: {}", note.id, note.title);
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Replaces the fields of the note with the given id.
    ///
    /// The existing note is removed and a new note with the same id is
    /// appended at the end, so callers must not rely on the updated note
    /// keeping its position. The date is reset to today.
    pub fn update(&mut self, id: u64, title: &str, subject: &str, content: &str) -> Result<Note> {
        Self::validate_fields(title, subject, content)?;

        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NoteError::NoteNotFound { id })?;
        self.notes.remove(pos);

        let note = Note::new(
            id,
            title.to_string(),
            subject.to_string(),
            content.to_string(),
        );
        info!("Updated note {}: {}", note.id, note.title);
        self.notes.push(note.clone());
        Ok(note)
    }

    /// Removes the note with the given id.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(NoteError::NoteNotFound { id })?;
        let removed = self.notes.remove(pos);
        info!("Deleted note {}: {}", removed.id, removed.title);
        Ok(())
    }

    /// Looks up a single note by id.
    pub fn get(&self, id: u64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Returns the full collection in current order.
    ///
    /// The shared borrow keeps callers from mutating the backing sequence;
    /// all mutation goes through the store's operations.
    pub fn get_all(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes currently stored.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Case-insensitive substring search over title, subject, and content.
    ///
    /// A blank or whitespace-only term returns the full collection. Matches
    /// come back in the store's current order.
    pub fn search(&self, term: &str) -> Vec<&Note> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.notes.iter().collect();
        }

        debug!("Searching {} notes for '{}'", self.notes.len(), needle);
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.subject.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Notes whose subject matches exactly (case-sensitive).
    pub fn filter_by_subject(&self, subject: &str) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.subject == subject).collect()
    }

    /// Notes whose title or content contains the tag, case-insensitive.
    ///
    /// The subject field is intentionally not consulted here.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Note> {
        let needle = tag.to_lowercase();
        self.notes
            .iter()
            .filter(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Per-subject note counts, keyed by the exact subject string.
    pub fn count_by_subject(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for note in &self.notes {
            *counts.entry(note.subject.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Summary counters for the statistics display.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_notes: self.notes.len(),
            distinct_subjects: self.count_by_subject().len(),
        }
    }
}
