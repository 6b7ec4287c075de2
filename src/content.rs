//! Per-file content summarization
//!
//! A file's dump line carries a one-line summary of its content: the
//! whitespace-collapsed text for ordinary files, or a placeholder when the
//! file is an image, empty, over the size cap, or unreadable.

use std::fmt;
use std::path::Path;

/// Extensions whose content is never inlined, only summarized as an image.
/// Compared case-insensitively against the final extension.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff", "ico"];

/// Summary of a single file's content for one output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSummary {
    /// Whitespace-collapsed text content.
    Text(String),
    /// Readable, but nothing left after collapsing whitespace.
    Empty,
    /// Image extension; content intentionally not read.
    Image,
    /// File exceeds the configured size cap.
    TooLarge,
    /// Read failed (missing, permission denied, not valid UTF-8).
    Unreadable,
}

impl fmt::Display for ContentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSummary::Text(s) => f.write_str(s),
            ContentSummary::Empty => f.write_str("<empty file>"),
            ContentSummary::Image => f.write_str("<image file>"),
            ContentSummary::TooLarge => f.write_str("<file too large>"),
            ContentSummary::Unreadable => f.write_str("<error reading file>"),
        }
    }
}

/// Check whether a path has an image extension.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let lower = e.to_lowercase();
            IMAGE_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Collapse all runs of whitespace (including newlines) to single spaces.
pub fn collapse_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Summarize a file's content for its output line.
///
/// Image extensions are summarized without touching the file. When
/// `max_size` is set, files over the cap are summarized without being
/// read. Everything else is read as UTF-8 and whitespace-collapsed;
/// any read failure becomes [`ContentSummary::Unreadable`].
pub fn summarize_file(path: &Path, max_size: Option<u64>) -> ContentSummary {
    if is_image(path) {
        return ContentSummary::Image;
    }

    if let Some(cap) = max_size {
        match path.metadata() {
            Ok(meta) if meta.len() > cap => return ContentSummary::TooLarge,
            Ok(_) => {}
            Err(_) => return ContentSummary::Unreadable,
        }
    }

    match std::fs::read_to_string(path) {
        Ok(content) => {
            let collapsed = collapse_whitespace(&content);
            if collapsed.is_empty() {
                ContentSummary::Empty
            } else {
                ContentSummary::Text(collapsed)
            }
        }
        Err(_) => ContentSummary::Unreadable,
    }
}
