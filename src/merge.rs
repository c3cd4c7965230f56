//! Idempotent fragment merging for shared resource files.
//!
//! The engine is text-based on purpose: it tests marker substrings and
//! inserts raw fragments before the closing tag of the file's root
//! container. It never parses XML.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::catalog::Fragment;

/// Per-file failure while merging. Callers treat these as warnings and
/// continue with the remaining target files.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The shared file the skeleton was expected to pre-create is absent.
    #[error("file not found: {0}")]
    FileMissing(String),

    /// No closing tag for the root container was found.
    #[error("no closing </{0}> tag found")]
    AnchorMissing(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Insert `content` immediately before the last `</container>` tag, keeping
/// trailing structure syntactically closed. Returns `None` when the closing
/// tag is absent.
pub fn insert_before_closing(text: &str, container: &str, content: &str) -> Option<String> {
    let closing = format!("</{container}>");
    let idx = text.rfind(&closing)?;

    let mut updated = String::with_capacity(text.len() + content.len());
    updated.push_str(&text[..idx]);
    updated.push_str(content);
    updated.push_str(&text[idx..]);
    Some(updated)
}

/// Merge all missing fragments into the file in one read-modify-write pass.
///
/// Returns whether the file was modified. A file whose fragments are all
/// present is left byte-for-byte unchanged and never rewritten, which is
/// what makes repeated runs safe and detectable as no-ops.
pub fn merge_fragments(
    path: &Path,
    container: &str,
    fragments: &[Fragment],
) -> Result<bool, MergeError> {
    if !path.exists() {
        return Err(MergeError::FileMissing(path.display().to_string()));
    }

    let original = fs::read_to_string(path)?;
    let mut text = original.clone();

    for fragment in fragments {
        if !text.contains(&fragment.marker) {
            text = insert_before_closing(&text, container, &fragment.content)
                .ok_or_else(|| MergeError::AnchorMissing(container.to_string()))?;
        }
    }

    if text == original {
        return Ok(false);
    }

    fs::write(path, text)?;
    Ok(true)
}
