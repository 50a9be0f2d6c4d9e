//! Path utilities

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Find the project root by looking for CMakeLists.txt
pub fn find_project_root() -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    find_project_root_from(&current_dir)
}

/// Find the project root starting from a specific directory
pub fn find_project_root_from(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        if dir.join("CMakeLists.txt").exists() {
            return Ok(dir.to_path_buf());
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                anyhow::bail!("Could not find CMakeLists.txt in current directory or any parent")
            }
        }
    }
}

/// Get the CMake build directory
pub fn get_build_dir(project_root: &Path) -> PathBuf {
    project_root.join("build")
}
