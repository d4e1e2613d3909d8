//! Session loop for the studynotes application
//!
//! This module reads commands line by line, validates raw input, and
//! dispatches to the note store, then renders the results.
use std::{
    fs::{read_to_string, OpenOptions},
    io::{stdin, stdout, Write},
    path::{Path, PathBuf},
    process::Command,
};

use clap::Parser;
use log::info;
use shell_words::split;
use tempfile::Builder;

use crate::{
    export_notes, read_content_file, Commands, Config, Note, NoteError, NoteStore, Result,
    SessionInput,
};

/// Placeholder shown by subject pickers; never a valid subject value.
const SUBJECT_PLACEHOLDER: &str = "Select Subject";

/// Session handler - processes commands and interfaces with NoteStore
pub struct App {
    /// The note store owning all session notes
    store: NoteStore,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new session with the given store and config
    pub fn new(store: NoteStore, config: Config, verbose: bool) -> Self {
        Self {
            store,
            config,
            verbose,
        }
    }

    /// Run the interactive session until quit or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!(
            "studynotes session. Type 'help' for commands; notes last until you quit."
        );
        if self.verbose {
            println!("Starting with {} note(s) in the store.", self.store.len());
        }

        loop {
            print!("notes> ");
            stdout().flush()?;

            let mut line = String::new();
            let read = stdin().read_line(&mut line)?;
            if read == 0 {
                // End of input
                break;
            }

            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let words = match split(line) {
                Ok(words) => words,
                Err(e) => {
                    eprintln!("Could not read command: {}", e);
                    continue;
                }
            };

            match SessionInput::try_parse_from(&words) {
                Ok(input) => {
                    if matches!(input.command, Commands::Quit) {
                        break;
                    }
                    if let Err(e) = self.dispatch(input.command) {
                        eprintln!("Error: {}", e);
                    }
                }
                Err(e) => {
                    // clap renders its own help and usage output
                    e.print().ok();
                }
            }
        }

        println!(
            "Session ended. {} note(s) discarded.",
            self.store.len()
        );
        Ok(())
    }

    fn dispatch(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Add {
                title,
                subject,
                content,
                file,
            } => self.handle_add(title, subject, content, file),

            Commands::Scan {
                file,
                title,
                subject,
            } => self.handle_scan(file, title, subject),

            Commands::List {
                subject,
                tag,
                json,
                detailed,
            } => self.handle_list(subject, tag, json, detailed),

            Commands::Search { query, json } => self.handle_search(query, json),

            Commands::Edit {
                id,
                title,
                subject,
                content,
                file,
                edit,
            } => self.handle_edit(id, title, subject, content, file, edit),

            Commands::Delete { id, force } => self.handle_delete(id, force),

            Commands::Stats => self.handle_stats(),

            Commands::Subjects => self.handle_subjects(),

            Commands::Export {
                output,
                format,
                subject,
            } => self.handle_export(output, format, subject),

            // Quit is intercepted by the session loop
            Commands::Quit => Ok(()),
        }
    }

    /// Rejects the picker placeholder before it ever reaches the store.
    fn ensure_subject_selected(subject: &str) -> Result<()> {
        if subject.trim().is_empty() || subject == SUBJECT_PLACEHOLDER {
            return Err(NoteError::SubjectNotSelected);
        }
        Ok(())
    }

    fn handle_add(
        &mut self,
        title: String,
        subject: String,
        content: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<()> {
        Self::ensure_subject_selected(&subject)?;

        // Get content based on the provided options
        let note_content = match (content, file) {
            (Some(content), _) => content,
            (_, Some(file_path)) => read_content_file(&file_path)?,
            (None, None) => self.open_editor_for_content(&title)?,
        };

        let note = self.store.create(&title, &subject, &note_content)?;
        println!(
            "{} (id {})",
            console::style("Note saved successfully!").green(),
            note.id
        );
        Ok(())
    }

    fn handle_scan(&mut self, file: PathBuf, title: String, subject: String) -> Result<()> {
        Self::ensure_subject_selected(&subject)?;

        // The extracted text is treated like any other note content
        let extracted = read_content_file(&file)?;
        let note = self.store.create(&title, &subject, &extracted)?;
        println!(
            "{} (id {}, {} characters scanned)",
            console::style("Note saved successfully!").green(),
            note.id,
            note.content.len()
        );
        Ok(())
    }

    fn handle_list(
        &self,
        subject: Option<String>,
        tag: Option<String>,
        json: bool,
        detailed: bool,
    ) -> Result<()> {
        let mut notes: Vec<&Note> = match &subject {
            Some(subject) => self.store.filter_by_subject(subject),
            None => self.store.get_all().iter().collect(),
        };

        if let Some(tag) = &tag {
            let needle = tag.to_lowercase();
            notes.retain(|n| {
                n.title.to_lowercase().contains(&needle)
                    || n.content.to_lowercase().contains(&needle)
            });
        }

        self.display_notes(&notes, json, detailed)?;

        if let Some(subject) = subject {
            println!("Filtered by subject: {}", subject);
        }
        if let Some(tag) = tag {
            println!("Filtered by tag: {}", tag);
        }
        Ok(())
    }

    fn handle_search(&self, query: String, json: bool) -> Result<()> {
        let results = self.store.search(&query);

        if results.is_empty() {
            println!("No notes found matching query: \"{}\"", query);
            return Ok(());
        }

        self.display_notes(&results, json, false)
    }

    fn handle_edit(
        &mut self,
        id: u64,
        title: Option<String>,
        subject: Option<String>,
        content: Option<String>,
        file: Option<PathBuf>,
        open_editor: bool,
    ) -> Result<()> {
        // Prefill from the existing note, like the original edit form
        let current = self
            .store
            .get(id)
            .ok_or(NoteError::NoteNotFound { id })?
            .clone();

        let new_title = title.unwrap_or(current.title);
        let new_subject = subject.unwrap_or(current.subject);
        Self::ensure_subject_selected(&new_subject)?;

        let new_content = match (content, file) {
            (Some(content), _) => content,
            (_, Some(file_path)) => read_content_file(&file_path)?,
            (None, None) if open_editor => {
                self.open_editor_with_content(&new_title, &current.content)?
            }
            (None, None) => current.content,
        };

        let note = self.store.update(id, &new_title, &new_subject, &new_content)?;
        println!(
            "{} (id {})",
            console::style("Note updated successfully!").green(),
            note.id
        );
        Ok(())
    }

    fn handle_delete(&mut self, id: u64, force: bool) -> Result<()> {
        // Fetch the note first to show details in the prompt
        let note = match self.store.get(id) {
            Some(note) => note.clone(),
            None => return Err(NoteError::NoteNotFound { id }),
        };

        if !force {
            println!("You are about to delete the following note:");
            println!("ID:      {}", note.id);
            println!("Title:   {}", note.title);
            println!("Subject: {}", note.subject);
            println!("Created: {}", note.date);

            if !note.content.is_empty() {
                let preview = note.content.lines().take(2).collect::<Vec<_>>().join("\n");
                println!("\nContent preview:");
                println!(
                    "{}{}",
                    preview,
                    if note.content.lines().count() > 2 {
                        "..."
                    } else {
                        ""
                    }
                );
            }

            println!("\nThis action cannot be undone!");
            print!("Are you sure you want to delete this note? [y/N]: ");
            stdout().flush()?;

            let mut input = String::new();
            stdin().read_line(&mut input)?;

            let input = input.trim().to_lowercase();
            if input != "y" && input != "yes" {
                println!("Deletion cancelled.");
                return Ok(());
            }
        }

        self.store.delete(id)?;
        println!(
            "{}",
            console::style(format!(
                "Note '{}' ({}) has been deleted.",
                note.title, note.id
            ))
            .yellow()
        );
        Ok(())
    }

    fn handle_stats(&self) -> Result<()> {
        let stats = self.store.stats();
        println!(
            "Total notes:      {}",
            console::style(stats.total_notes).bold()
        );
        println!(
            "Subjects covered: {}",
            console::style(stats.distinct_subjects).bold()
        );

        let counts = self.store.count_by_subject();
        if !counts.is_empty() {
            println!("\nNotes per subject:");
            for (subject, count) in counts {
                println!("  {}: {}", console::style(subject).cyan(), count);
            }
        }
        Ok(())
    }

    fn handle_subjects(&self) -> Result<()> {
        println!("Suggested subjects (free entry is also accepted):");
        for subject in &self.config.subjects {
            println!("  {}", console::style(subject).cyan());
        }
        Ok(())
    }

    fn handle_export(
        &self,
        output: PathBuf,
        format: String,
        subject: Option<String>,
    ) -> Result<()> {
        let notes: Vec<&Note> = match &subject {
            Some(subject) => self.store.filter_by_subject(subject),
            None => self.store.get_all().iter().collect(),
        };

        if notes.is_empty() {
            println!("Nothing to export.");
            return Ok(());
        }

        export_notes(&notes, &format, &output)?;
        println!(
            "Exported {} note{} to {}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" },
            output.display()
        );
        Ok(())
    }

    /// Display notes in the requested format
    fn display_notes(&self, notes: &[&Note], json: bool, detailed: bool) -> Result<()> {
        if notes.is_empty() {
            println!("No notes found. Add a note or scan a capture to get started!");
            return Ok(());
        }

        if json {
            self.display_notes_json(notes, detailed)?;
        } else {
            self.display_notes_text(notes, detailed);
        }

        // Print count at the end
        println!(
            "\nFound {} note{}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" }
        );
        Ok(())
    }

    /// Display notes in JSON format
    fn display_notes_json(&self, notes: &[&Note], detailed: bool) -> Result<()> {
        if detailed {
            // Full notes with all fields
            println!("{}", serde_json::to_string_pretty(notes)?);
        } else {
            // Simplified notes with just the card header fields
            let simplified: Vec<serde_json::Value> = notes
                .iter()
                .map(|note| {
                    serde_json::json!({
                        "id": note.id,
                        "title": note.title,
                        "subject": note.subject,
                        "date": note.date,
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&simplified)?);
        }
        Ok(())
    }

    /// Display notes in text format
    fn display_notes_text(&self, notes: &[&Note], detailed: bool) {
        // Use terminal width for separators if available
        let term_width = terminal_size::terminal_size()
            .map(|(w, _)| w.0 as usize)
            .unwrap_or(80);

        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(term_width.min(50)));
            }

            println!("ID: {} | {}", note.id, note.date);
            println!("Title: {}", console::style(&note.title).bold());
            println!("Subject: {}", console::style(&note.subject).cyan());

            if detailed {
                println!("\n{}", note.content);
            } else {
                let preview = get_content_preview(&note.content, 100);
                if !preview.is_empty() {
                    println!("\n{}", preview);
                }
            }
        }
    }

    fn open_editor_for_content(&self, title: &str) -> Result<String> {
        let temp_file = Builder::new().suffix(".txt").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        let editor_cmd = self.config.get_editor_command();

        self.write_editor_template(&temp_path, title, None)?;

        info!("Opening editor to write note content. Save and exit when done...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        let content = read_to_string(&temp_path)?;
        Ok(process_editor_content(content))
    }

    fn open_editor_with_content(&self, title: &str, existing_content: &str) -> Result<String> {
        let temp_file = Builder::new().suffix(".txt").tempfile()?;
        let temp_path = temp_file.path().to_path_buf();

        let editor_cmd = self.config.get_editor_command();

        self.write_editor_template(&temp_path, title, Some(existing_content))?;

        info!("Opening editor with the current note content...");
        self.launch_editor(&editor_cmd, &temp_path)?;

        let content = read_to_string(&temp_path)?;
        Ok(process_editor_content(content))
    }

    fn write_editor_template(
        &self,
        path: &Path,
        title: &str,
        existing: Option<&str>,
    ) -> Result<()> {
        let mut file = OpenOptions::new().write(true).open(path)?;

        writeln!(file, "<!-- {} -->", title)?;
        writeln!(
            file,
            "<!-- Write your note content below. Lines inside HTML comments are ignored. -->"
        )?;
        writeln!(file, "<!-- Save and exit the editor when you're done. -->")?;
        writeln!(file)?;
        if let Some(existing) = existing {
            writeln!(file, "{}", existing)?;
        }

        Ok(())
    }

    fn launch_editor(&self, editor_cmd: &str, file_path: &Path) -> Result<()> {
        let path_str = file_path.to_string_lossy();

        // Handle shell-like command parsing
        let args = split(editor_cmd).map_err(|e| NoteError::EditorError {
            message: format!("Failed to parse editor command: {}", e),
        })?;

        if args.is_empty() {
            return Err(NoteError::EditorError {
                message: "Empty editor command".to_string(),
            });
        }

        // First word is the program name, rest are arguments
        let program = &args[0];

        let mut command = Command::new(program);
        if args.len() > 1 {
            command.args(&args[1..]);
        }
        command.arg(path_str.as_ref());

        let status = command.status()?;

        if !status.success() {
            return Err(NoteError::EditorError {
                message: "Editor exited with non-zero status".to_string(),
            });
        }

        Ok(())
    }
}

/// Strips template comment lines from edited content.
fn process_editor_content(content: String) -> String {
    content
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("<!--") && !line.trim_end().ends_with("-->")
        })
        .collect::<Vec<&str>>()
        .join("\n")
        .trim_start_matches('\n')
        .to_string()
}

/// Generate a content preview for displaying brief notes
fn get_content_preview(content: &str, max_len: usize) -> String {
    // Get first non-empty line
    let first_line = content
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("");

    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let truncated: String = first_line.chars().take(max_len).collect();
        format!("{}...", truncated)
    }
}
