// src/core/populator.rs
use crate::config::Settings;
use crate::core::random::generate;
use crate::core::scanner::list_regular_files;
use crate::error::{OpError, OpResult};
use crate::models::PopulateSummary;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Creates `dir` unless it already exists as a directory.
///
/// Only the last path component is created; a missing parent is an error.
///
/// # Errors
///
/// Returns [`OpError::Filesystem`] if the directory cannot be created or a
/// non-directory already occupies the path.
pub fn ensure_directory(dir: &Path) -> OpResult<()> {
    match fs::create_dir(dir) {
        Ok(()) => {
            debug!(path = %dir.display(), "created directory");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => {
            debug!(path = %dir.display(), "directory already exists");
            Ok(())
        }
        Err(err) => Err(OpError::Filesystem(format!(
            "cannot create directory {}: {err}",
            dir.display()
        ))),
    }
}

/// Copies `source` to `destination`, refusing to replace an existing entry.
///
/// # Errors
///
/// Returns [`OpError::Filesystem`] if `destination` already exists or either
/// file cannot be opened, read or written. A destination left incomplete by a
/// failed copy is removed.
pub fn copy_no_overwrite(source: &Path, destination: &Path) -> OpResult<u64> {
    let mut reader = File::open(source)?;
    let mut writer = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(destination)
        .map_err(|err| {
            OpError::Filesystem(format!(
                "cannot copy {} to {}: {err}",
                source.display(),
                destination.display()
            ))
        })?;
    let copied = io::copy(&mut reader, &mut writer).and_then(|copied| {
        writer.flush()?;
        Ok(copied)
    });
    drop(writer);
    copied.map_err(|err| {
        if let Err(cleanup) = fs::remove_file(destination) {
            warn!(path = %destination.display(), %cleanup, "failed to remove partial copy");
        }
        OpError::Filesystem(format!(
            "cannot copy {} to {}: {err}",
            source.display(),
            destination.display()
        ))
    })
}

/// Fills `dir` with random files, reports them to `out`, then moves every
/// regular file in `dir` into its backup subdirectory.
///
/// # Arguments
///
/// * `dir` - Target directory; created if absent
/// * `file_count` - Number of files to generate
/// * `settings` - Name/content lengths, extension and backup folder name
/// * `out` - Receives one `File: "<name>", Size: <n> bytes` line per file
///
/// # Returns
///
/// * `Ok(PopulateSummary)` - Counts and the listing written to `out`
///
/// # Errors
///
/// The first failure aborts the remaining steps:
/// * [`OpError::Filesystem`] for directory creation, file writes, listing,
///   copying (including an already existing backup entry) or removal
/// * [`OpError::Generic`] if `out` rejects the listing
pub fn populate<W: Write>(
    dir: &Path,
    file_count: u64,
    settings: &Settings,
    out: &mut W,
) -> OpResult<PopulateSummary> {
    ensure_directory(dir)?;

    let suffix = settings.suffix();
    for _ in 0..file_count {
        let name = format!("{}{suffix}", generate(settings.name_length));
        let path = dir.join(&name);
        let mut file = File::create(&path).map_err(|err| {
            OpError::Filesystem(format!("cannot create {}: {err}", path.display()))
        })?;
        file.write_all(generate(settings.content_length).as_bytes())?;
        debug!(file = %name, "created file");
    }
    info!(count = file_count, dir = %dir.display(), "generated files");

    let listed = list_regular_files(dir)?;
    for entry in &listed {
        writeln!(out, "File: \"{}\", Size: {} bytes", entry.file_name(), entry.size)
            .map_err(|err| OpError::Generic(format!("failed to write listing: {err}")))?;
    }

    let backup_dir = dir.join(&settings.backup_dir);
    ensure_directory(&backup_dir)?;

    let mut moved: u64 = 0;
    for entry in list_regular_files(dir)? {
        let Some(name) = entry.path.file_name() else {
            continue;
        };
        let destination = backup_dir.join(name);
        copy_no_overwrite(&entry.path, &destination)?;
        fs::remove_file(&entry.path)?;
        moved = moved.saturating_add(1);
        debug!(from = %entry.path.display(), to = %destination.display(), "moved file");
    }
    info!(moved, backup = %backup_dir.display(), "moved files to backup");

    Ok(PopulateSummary {
        created: file_count,
        listed,
        moved,
        backup_dir,
    })
}
