//! Core data structure for the studynotes application.
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Represents a single study note in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Store-assigned identifier, unique within the session
    pub id: u64,
    /// Note title
    pub title: String,
    /// Subject label, e.g. "Mathematics" or "History"
    pub subject: String,
    /// Note body; embedded line breaks are preserved verbatim
    pub content: String,
    /// Creation date (UTC calendar date, serialized as YYYY-MM-DD)
    pub date: NaiveDate,
}

impl Note {
    /// Creates a note stamped with today's date.
    ///
    /// Ids are assigned by the store, so construction stays crate-private.
    pub(crate) fn new(id: u64, title: String, subject: String, content: String) -> Self {
        Note {
            id,
            title,
            subject,
            content,
            date: Utc::now().date_naive(),
        }
    }
}
