//! Error types for the studynotes application.
//!
//! This module defines custom error types that categorize different failures
//! that can occur during note management operations.

use std::{io, path::PathBuf};

use thiserror::Error;

/// The main error type for the studynotes application.
#[derive(Error, Debug)]
pub enum NoteError {
    /// Errors related to file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A required text field was empty when creating or updating a note.
    #[error("Required field is empty: {field}")]
    EmptyField { field: &'static str },

    /// The subject input still carried the placeholder value.
    #[error("A subject must be selected before saving")]
    SubjectNotSelected,

    /// Note was not found when performing an operation.
    #[error("Note not found: {id}")]
    NoteNotFound { id: u64 },

    /// A content or configuration file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Unknown output format requested for an export.
    #[error("Invalid format: {message}")]
    InvalidFormat { message: String },

    /// Failures launching or running the external editor.
    #[error("{message}")]
    EditorError { message: String },
}
