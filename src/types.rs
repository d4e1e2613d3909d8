//! Shared types for the studynotes application.
//!
//! This module holds the crate-wide Result alias, the statistics summary,
//! and the session command set.
use std::path::PathBuf;

use clap::Subcommand;

use crate::NoteError;

/// A specialized Result type for studynotes operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Summary counters for the statistics display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    /// Notes currently in the store
    pub total_notes: usize,
    /// Number of distinct subject strings present
    pub distinct_subjects: usize,
}

/// Available commands within a studynotes session
#[derive(Subcommand)]
pub enum Commands {
    /// Add a note by hand
    Add {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Subject label for the note
        #[clap(short, long)]
        subject: String,

        /// Content of the note; omit to compose in your editor
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the note's content
        #[clap(short, long)]
        file: Option<PathBuf>,
    },

    /// Create a note from text extracted by an OCR pass
    Scan {
        /// File holding the extracted text
        file: PathBuf,

        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Subject label for the note
        #[clap(short, long)]
        subject: String,
    },

    /// List notes with optional filtering
    List {
        /// Only show notes with this exact subject
        #[clap(short, long)]
        subject: Option<String>,

        /// Only show notes whose title or content contains this tag
        #[clap(short, long)]
        tag: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,

        /// Show full note content instead of a preview
        #[clap(short, long)]
        detailed: bool,
    },

    /// Search notes by title, subject, or content
    Search {
        /// Search query text
        query: String,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Edit an existing note; omitted fields keep their current value
    Edit {
        /// ID of the note to edit
        id: u64,

        /// New title for the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New subject for the note
        #[clap(short, long)]
        subject: Option<String>,

        /// New content for the note
        #[clap(short, long)]
        content: Option<String>,

        /// Path to a file containing the new note content
        #[clap(short, long)]
        file: Option<PathBuf>,

        /// Open the current content in your editor
        #[clap(short, long)]
        edit: bool,
    },

    /// Delete a note by ID
    Delete {
        /// ID of the note to delete
        id: u64,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },

    /// Show summary statistics for the session
    Stats,

    /// List the configured subject labels
    Subjects,

    /// Export notes to a document
    Export {
        /// Path for the exported document
        #[clap(short, long)]
        output: PathBuf,

        /// Format to export to
        #[clap(short, long, value_parser = ["markdown", "md", "json", "html"], default_value = "markdown")]
        format: String,

        /// Only export notes with this exact subject
        #[clap(short, long)]
        subject: Option<String>,
    },

    /// End the session; notes are discarded
    #[clap(alias = "exit")]
    Quit,
}
