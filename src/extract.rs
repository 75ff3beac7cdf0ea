// src/extract.rs

//! Markdown extraction for hand-editing `myData.json`.
//!
//! Reads a Markdown file and turns it into a JSON string literal that can be
//! pasted as a project's `longDescription`.

use std::fs;
use std::path::Path;

use crate::error::{AppError, Result};

/// Read a Markdown file, dropping a leading byte-order mark and surrounding
/// whitespace.
pub fn read_long_description(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| AppError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(clean(&text).to_string())
}

/// Strip a leading BOM, then trim whitespace (a stray BOM counts as
/// whitespace too).
pub fn clean(text: &str) -> &str {
    text.strip_prefix('\u{FEFF}')
        .unwrap_or(text)
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Encode text as a JSON string literal.
pub fn to_json_string(text: &str) -> Result<String> {
    Ok(serde_json::to_string(text)?)
}

/// Read a Markdown file and encode it, ready to paste.
pub fn markdown_file_to_json(path: impl AsRef<Path>) -> Result<String> {
    to_json_string(&read_long_description(path)?)
}
