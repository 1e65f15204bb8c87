// tests/integration_tests/population_test.rs
use super::common::regular_files;
use anyhow::Result;
use dirbackup::{Settings, analyze, populate};
use std::io;
use tempfile::TempDir;

#[test]
fn test_populate_then_analyze_backup() -> Result<()> {
    let temp = TempDir::new()?;
    let dir = temp.path().join("testdir");

    let summary = populate(&dir, 3, &Settings::default(), &mut io::sink())?;
    let report = analyze(&dir.join("backup"))?;

    assert!(regular_files(&dir)?.is_empty(), "originals should be moved");
    assert_eq!(report.total_files, summary.moved);
    assert!(report.total_files <= 3);
    assert_eq!(report.total_size, report.total_files * 100);
    if report.total_files == 3 {
        assert_eq!(report.by_extension.len(), 1);
        assert_eq!(report.by_extension.get(".txt"), Some(&3));
    }
    Ok(())
}

#[test]
fn test_five_files_report() -> Result<()> {
    let temp = TempDir::new()?;
    let dir = temp.path().join("five");

    populate(&dir, 5, &Settings::default(), &mut io::sink())?;
    let report = analyze(&dir.join("backup"))?;

    // 62^8 possible names make a collision among five practically impossible
    assert_eq!(report.total_files, 5);
    assert_eq!(report.total_size, 500);
    assert_eq!(report.by_extension.get(".txt"), Some(&5));
    Ok(())
}

#[test]
fn test_second_run_adds_to_backup() -> Result<()> {
    let temp = TempDir::new()?;
    let dir = temp.path().join("twice");

    populate(&dir, 2, &Settings::default(), &mut io::sink())?;
    populate(&dir, 2, &Settings::default(), &mut io::sink())?;

    let backup = regular_files(&dir.join("backup"))?;
    assert_eq!(backup.len(), 4);
    assert!(regular_files(&dir)?.is_empty());
    Ok(())
}

#[test]
fn test_backup_contents_match_listing() -> Result<()> {
    let temp = TempDir::new()?;
    let dir = temp.path().join("listing");

    let summary = populate(&dir, 3, &Settings::default(), &mut io::sink())?;

    let listed: Vec<String> = summary.listed.iter().map(|f| f.file_name()).collect();
    assert_eq!(listed, regular_files(&dir.join("backup"))?);
    Ok(())
}
