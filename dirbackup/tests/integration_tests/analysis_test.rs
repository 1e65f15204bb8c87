// tests/integration_tests/analysis_test.rs
use super::common::create_test_file;
use anyhow::Result;
use dirbackup::analyze;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_directory() -> Result<()> {
    let temp = TempDir::new()?;
    let report = analyze(temp.path())?;

    assert_eq!(report.total_files, 0);
    assert_eq!(report.total_size, 0);
    assert!(report.by_extension.is_empty());
    Ok(())
}

#[test]
fn test_mixed_extensions_rendered_in_order() -> Result<()> {
    let temp = TempDir::new()?;
    create_test_file(temp.path(), "notes.txt", "1234")?;
    create_test_file(temp.path(), "data.csv", "a,b")?;
    create_test_file(temp.path(), "more.txt", "12")?;
    create_test_file(temp.path(), "LICENSE", "MIT")?;
    create_test_file(temp.path(), ".env", "X=1")?;
    fs::create_dir(temp.path().join("subdir.d"))?;

    let report = analyze(temp.path())?;
    let mut out = Vec::new();
    report.render(&mut out)?;

    assert_eq!(
        String::from_utf8(out)?,
        "Total files: 5\n\
         Total size: 15 bytes\n\
         File types distribution:\n\
         : 2 files\n\
         .csv: 1 files\n\
         .txt: 2 files\n"
    );
    Ok(())
}
