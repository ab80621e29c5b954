//! Backup Module
//!
//! Copy-before-overwrite for the generated report: the previous document
//! is copied aside before a new one replaces it. There is no rollback if
//! the subsequent write fails.

use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Copy an existing file to its backup path before it is overwritten.
///
/// The backup sits next to the original with `_backup` appended to the
/// file stem (`index.html` → `index_backup.html`). An existing backup is
/// replaced. Returns the backup path, or `None` when there was nothing
/// to back up.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use vendorboard::backup_existing;
///
/// # fn main() -> Result<(), vendorboard::ReportError> {
/// if let Some(backup) = backup_existing(Path::new("index.html"))? {
///     println!("Backup created: {}", backup.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, ReportError> {
    if !path.exists() {
        return Ok(None);
    }

    let backup = backup_path(path);
    std::fs::copy(path, &backup)?;
    Ok(Some(backup))
}

/// Backup path of a report file: `_backup` appended to the stem, same
/// extension and directory.
fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match path.extension() {
        Some(ext) => format!("{}_backup.{}", stem, ext.to_string_lossy()),
        None => format!("{}_backup", stem),
    };

    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_backup_path_with_extension() {
        assert_eq!(
            backup_path(Path::new("index.html")),
            PathBuf::from("index_backup.html")
        );
        assert_eq!(
            backup_path(Path::new("out/report.html")),
            PathBuf::from("out/report_backup.html")
        );
    }

    #[test]
    fn test_backup_path_without_extension() {
        assert_eq!(
            backup_path(Path::new("report")),
            PathBuf::from("report_backup")
        );
    }

    #[test]
    fn test_backup_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        assert_eq!(backup_existing(&path).unwrap(), None);
    }

    #[test]
    fn test_backup_copies_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "<html>old</html>").unwrap();

        let backup = backup_existing(&path).unwrap().unwrap();
        assert_eq!(backup, dir.path().join("index_backup.html"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "<html>old</html>");
        // The original is untouched.
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>old</html>");
    }

    #[test]
    fn test_backup_replaces_previous_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let backup = dir.path().join("index_backup.html");
        fs::write(&path, "new").unwrap();
        fs::write(&backup, "stale").unwrap();

        backup_existing(&path).unwrap();
        assert_eq!(fs::read_to_string(&backup).unwrap(), "new");
    }
}
