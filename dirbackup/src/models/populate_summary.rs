// src/models/populate_summary.rs

use std::path::PathBuf;

use super::FileEntry;

/// Outcome of a successful population run.
#[derive(Debug, Default)]
pub struct PopulateSummary {
    /// Files generated, counting attempts; a name collision overwrites an
    /// earlier file, so the directory may hold fewer.
    pub created: u64,
    /// Regular files listed before the move, sorted by name.
    pub listed: Vec<FileEntry>,
    pub moved: u64,
    pub backup_dir: PathBuf,
}
