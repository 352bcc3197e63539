//! Timestamped whole-file backups taken before a workbook is overwritten

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, SyncError};

/// `games.xlsx` -> `games.backup_20260117_093000.xlsx`
pub fn backup_path(path: &Path, at: DateTime<Local>) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    path.with_file_name(format!(
        "{}.backup_{}{}",
        stem,
        at.format("%Y%m%d_%H%M%S"),
        suffix
    ))
}

/// Copy `path` next to itself under a backup name.
///
/// Returns `None` when there is nothing to back up yet.
pub fn backup_file(path: &Path, at: DateTime<Local>) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Ok(None);
    }
    let target = backup_path(path, at);
    fs::copy(path, &target).map_err(|e| SyncError::io(&target, e))?;
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_backup_path_keeps_extension() {
        let path = Path::new("/data/Ps2 games.xlsx");
        assert_eq!(
            backup_path(path, at()),
            PathBuf::from("/data/Ps2 games.backup_20260117_093000.xlsx")
        );
    }

    #[test]
    fn test_backup_path_without_extension() {
        assert_eq!(
            backup_path(Path::new("games"), at()),
            PathBuf::from("games.backup_20260117_093000")
        );
    }

    #[test]
    fn test_backup_file_copies_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("wishlist.xlsx");
        fs::write(&path, b"original").unwrap();

        let backup = backup_file(&path, at()).unwrap().unwrap();
        assert_eq!(fs::read(&backup).unwrap(), b"original");
        assert!(path.exists());
    }

    #[test]
    fn test_backup_missing_file_is_noop() {
        let dir = tempdir().unwrap();
        let result = backup_file(&dir.path().join("absent.xlsx"), at()).unwrap();
        assert!(result.is_none());
    }
}
