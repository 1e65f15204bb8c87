// src/core/analyzer.rs
use crate::core::scanner::list_regular_files;
use crate::error::OpResult;
use crate::models::DirectoryReport;
use std::path::Path;
use tracing::info;

/// Tallies count, total size and extension distribution of the regular
/// files directly inside `dir`.
///
/// # Errors
///
/// Returns [`crate::OpError::Filesystem`] if `dir` cannot be enumerated or
/// an entry's size cannot be read.
pub fn analyze(dir: &Path) -> OpResult<DirectoryReport> {
    let mut report = DirectoryReport::new();
    for entry in list_regular_files(dir)? {
        report.record(&entry);
    }
    info!(
        dir = %dir.display(),
        files = report.total_files,
        bytes = report.total_size,
        "analyzed directory"
    );
    Ok(report)
}
