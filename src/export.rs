//! Document export for the note collection.
//!
//! Renders a borrowed set of notes into markdown, JSON, or HTML and writes
//! the chosen document to disk. Export never writes back into the store.

use std::{fs, path::Path};

use log::info;
use pulldown_cmark::{html, Options, Parser};

use crate::{Note, NoteError, Result};

/// Renders notes as a single markdown document.
pub fn render_markdown(notes: &[&Note]) -> String {
    let mut doc = String::new();
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            doc.push_str("\n---\n\n");
        }
        doc.push_str(&format!("# {}\n\n", note.title));
        doc.push_str(&format!("*{} | {}*\n\n", note.subject, note.date));
        doc.push_str(&note.content);
        doc.push('\n');
    }
    doc
}

/// Renders notes as a pretty-printed JSON array.
pub fn render_json(notes: &[&Note]) -> Result<String> {
    Ok(serde_json::to_string_pretty(notes)?)
}

/// Renders notes as a standalone HTML document.
pub fn render_html(notes: &[&Note]) -> String {
    let markdown = render_markdown(notes);
    let parser = Parser::new_ext(&markdown, Options::empty());
    let mut body = String::new();
    html::push_html(&mut body, parser);

    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Study Notes</title></head>\n<body>\n{}</body>\n</html>\n",
        body
    )
}

/// Writes the notes to `output` in the requested format.
///
/// Accepted formats: "markdown" (or "md"), "json", "html".
pub fn export_notes(notes: &[&Note], format: &str, output: &Path) -> Result<()> {
    let normalized = format.to_lowercase();
    let normalized = match normalized.as_str() {
        "md" => "markdown".to_string(),
        _ => normalized,
    };

    let document = match normalized.as_str() {
        "markdown" => render_markdown(notes),
        "json" => render_json(notes)?,
        "html" => render_html(notes),
        other => {
            return Err(NoteError::InvalidFormat {
                message: format!("{}. Must be one of: markdown, json, html", other),
            })
        }
    };

    fs::write(output, document)?;
    info!("Exported {} notes to {}", notes.len(), output.display());
    Ok(())
}
