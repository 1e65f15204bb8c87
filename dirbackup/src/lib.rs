pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use cli::{Args, RunOutcome, run, run_with};
pub use config::Settings;
pub use crate::core::analyzer::analyze;
pub use crate::core::populator::{copy_no_overwrite, ensure_directory, populate};
pub use crate::core::random::{generate, generate_with};
pub use crate::core::scanner::list_regular_files;
pub use error::{OpError, OpResult};
pub use models::{DirectoryReport, FileEntry, PopulateSummary, extension_of};
