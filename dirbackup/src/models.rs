// src/models.rs
mod directory_report;
mod file_entry;
mod populate_summary;

pub use directory_report::DirectoryReport;
pub use file_entry::{FileEntry, extension_of};
pub use populate_summary::PopulateSummary;
