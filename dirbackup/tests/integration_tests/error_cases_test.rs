// tests/integration_tests/error_cases_test.rs
use super::common::create_test_file;
use anyhow::Result;
use dirbackup::{OpError, Settings, analyze, populate};
use std::io;
use tempfile::TempDir;

#[test]
fn test_populate_below_regular_file() -> Result<()> {
    let temp = TempDir::new()?;
    create_test_file(temp.path(), "plain", "I am a file")?;
    let target = temp.path().join("plain").join("testdir");

    let result = populate(&target, 2, &Settings::default(), &mut io::sink());

    assert!(matches!(result, Err(OpError::Filesystem(_))));
    assert!(!target.exists());
    Ok(())
}

#[test]
fn test_populate_missing_parent() -> Result<()> {
    let temp = TempDir::new()?;
    let target = temp.path().join("missing").join("testdir");

    let err = populate(&target, 1, &Settings::default(), &mut io::sink())
        .expect_err("parent directory does not exist");

    assert!(err.is_filesystem());
    assert!(err.to_string().starts_with("Filesystem error: "));
    Ok(())
}

#[test]
fn test_analyze_a_regular_file() -> Result<()> {
    let temp = TempDir::new()?;
    create_test_file(temp.path(), "file.txt", "content")?;

    let err = analyze(&temp.path().join("file.txt")).expect_err("not a directory");
    assert!(err.is_filesystem());
    Ok(())
}
