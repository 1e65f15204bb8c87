// src/core/scanner.rs
use crate::error::{OpError, OpResult};
use crate::models::FileEntry;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;


/// Lists the regular files directly inside `dir`, sorted by file name.
///
/// Subdirectories, symbolic links and special files are skipped, and the
/// walk never descends below `dir`.
///
/// # Arguments
///
/// * `dir` - The directory to enumerate
///
/// # Errors
///
/// Returns [`OpError::Filesystem`] if:
/// * `dir` does not exist or is not a directory
/// * An entry's metadata cannot be read
pub fn list_regular_files(dir: &Path) -> OpResult<Vec<FileEntry>> {
    if !dir.is_dir() {
        return Err(OpError::Filesystem(format!(
            "not a directory: {}",
            dir.display()
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            debug!(path = %entry.path().display(), "skipping non-regular entry");
            continue;
        }

        let size = entry.metadata()?.len();
        files.push(FileEntry::new(entry.into_path(), size));
    }

    Ok(files)
}
