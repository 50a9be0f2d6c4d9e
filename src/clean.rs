//! Build directory removal

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::utils::terminal::print_info;

/// Remove the build directory if it exists, reporting the reclaimed size.
/// A missing directory is not an error.
pub fn clean_build_dir(build_dir: &Path) -> Result<()> {
    if !build_dir.is_dir() {
        return Ok(());
    }

    let size = dir_size(build_dir);
    fs::remove_dir_all(build_dir)
        .with_context(|| format!("Failed to remove {}", build_dir.display()))?;
    print_info(&format!(
        "removed {} ({})",
        build_dir.display(),
        format_size(size)
    ));
    Ok(())
}

fn dir_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .filter(|metadata| metadata.is_file())
        .map(|metadata| metadata.len())
        .sum()
}

fn format_size(size_bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size_bytes as f64;
    let mut unit_idx = 0;

    while size >= 1024.0 && unit_idx < UNITS.len() - 1 {
        size /= 1024.0;
        unit_idx += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_existing_dir() {
        let root = tempfile::tempdir().unwrap();
        let build_dir = root.path().join("build");
        fs::create_dir(&build_dir).unwrap();
        fs::write(build_dir.join("CMakeCache.txt"), "cache").unwrap();
        fs::create_dir(build_dir.join("CMakeFiles")).unwrap();
        fs::write(build_dir.join("CMakeFiles").join("x.obj"), "obj").unwrap();

        clean_build_dir(&build_dir).unwrap();
        assert!(!build_dir.exists());
    }

    #[test]
    fn test_clean_missing_dir_is_ok() {
        let root = tempfile::tempdir().unwrap();
        let build_dir = root.path().join("build");
        assert!(clean_build_dir(&build_dir).is_ok());
    }

    #[test]
    fn test_dir_size_sums_files() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join("a"), [0u8; 100]).unwrap();
        fs::write(root.path().join("b"), [0u8; 24]).unwrap();
        assert_eq!(dir_size(root.path()), 124);
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1024 * 1024), "1.00 MB");
    }
}
