use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use which::which;

use crate::Result;

/// Session configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Subjects offered by the interface; free entry is still allowed
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,

    /// Default editor command for composing note content
    #[serde(default)]
    pub editor_command: Option<String>,
}

fn default_subjects() -> Vec<String> {
    [
        "Mathematics",
        "Science",
        "History",
        "Geography",
        "Current Affairs",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            subjects: default_subjects(),
            editor_command: None,
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    // This method provides smart fallbacks when no editor is configured
    pub fn get_editor_command(&self) -> String {
        // First try the configured editor
        if let Some(editor) = &self.editor_command {
            return editor.clone();
        }

        // Then try environment variable
        if let Ok(editor) = std::env::var("EDITOR") {
            return editor;
        }

        // Fall back to platform defaults
        if cfg!(windows) {
            "notepad".to_string()
        } else if cfg!(target_os = "macos") {
            "open -t".to_string()
        } else {
            // Try common Linux editors
            for editor in &["nano", "vim", "vi", "emacs"] {
                if which(editor).is_ok() {
                    return editor.to_string();
                }
            }
            "nano".to_string()
        }
    }
}
