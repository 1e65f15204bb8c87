// src/models/file_entry.rs

use std::path::{Path, PathBuf};

/// A regular file found directly inside a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub size: u64,
    pub extension: String,
}

impl FileEntry {
    #[inline]
    #[must_use]
    pub fn new(path: PathBuf, size: u64) -> Self {
        let extension = extension_of(&path);
        Self {
            path,
            size,
            extension,
        }
    }

    /// Final path component, lossily converted for display.
    #[must_use]
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Returns the extension of `path` including the leading dot, or an empty
/// string when there is none. A name that only starts with a dot
/// (`.hidden`) has no extension; a trailing dot (`notes.`) yields `"."`.
#[must_use]
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}
