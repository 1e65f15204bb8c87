// src/models/directory_report.rs

use std::collections::BTreeMap;
use std::io::{self, Write};

use super::FileEntry;

/// Aggregate statistics over the regular files directly inside a directory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirectoryReport {
    pub total_files: u64,
    pub total_size: u64,
    /// Extension (with leading dot, empty if none) to occurrence count.
    pub by_extension: BTreeMap<String, u64>,
}

impl DirectoryReport {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_files: 0,
            total_size: 0,
            by_extension: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, entry: &FileEntry) {
        self.total_files = self.total_files.saturating_add(1);
        self.total_size = self.total_size.saturating_add(entry.size);
        let count = self.by_extension.entry(entry.extension.clone()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Writes the human-readable report, extensions in key order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total files: {}", self.total_files)?;
        writeln!(out, "Total size: {} bytes", self.total_size)?;
        writeln!(out, "File types distribution:")?;
        for (extension, count) in &self.by_extension {
            writeln!(out, "{extension}: {count} files")?;
        }
        Ok(())
    }
}
