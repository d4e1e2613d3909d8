use std::{fs, path::Path};

use log::debug;

use crate::{NoteError, NoteStore, Result};

/// Reads note content from a file, e.g. text produced by an OCR pass.
pub fn read_content_file(path: &Path) -> Result<String> {
    if !path.exists() || !path.is_file() {
        return Err(NoteError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Reading note content from {}", path.display());
    Ok(fs::read_to_string(path)?)
}

/// Seeds the bundled demo notes into the store.
pub fn seed_sample_notes(store: &mut NoteStore) -> Result<()> {
    store.create(
        "Algebra Formulas",
        "Mathematics",
        "Quadratic Formula: x = [-b ± √(b² - 4ac)] / 2a\n\nArithmetic Progression: a, a+d, a+2d, ...\nSum = n/2 [2a + (n-1)d]",
    )?;
    store.create(
        "Indian Constitution",
        "History",
        "The Constitution of India was adopted on 26 November 1949 and came into effect on 26 January 1950.\n\nIt is the longest written constitution of any sovereign country in the world.",
    )?;
    store.create(
        "Newton's Laws of Motion",
        "Science",
        "First Law: An object at rest stays at rest and an object in motion stays in motion unless acted upon by an external force.\n\nSecond Law: F = ma\n\nThird Law: For every action, there is an equal and opposite reaction.",
    )?;
    Ok(())
}
