//! Resource root resolution and resource loading

use crate::error::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Directory under the resource root that holds the layered SQL files
pub const SQL_DIR: &str = "sql";

/// Resolve the resource root.
///
/// An explicit directory wins and must exist. Otherwise the root is derived
/// from where the `strata` executable is installed, never from the caller's
/// working directory.
pub fn resolve_root(explicit: Option<&Path>) -> CoreResult<PathBuf> {
    if let Some(dir) = explicit {
        if !dir.is_dir() {
            return Err(CoreError::ProjectNotFound {
                path: dir.display().to_string(),
            });
        }
        return Ok(dir.to_path_buf());
    }

    let exe = std::env::current_exe()?;
    let root = install_root(&exe);
    log::debug!("Resolved resource root {} from {}", root.display(), exe.display());
    Ok(root)
}

/// The executable's directory if it contains `sql/`, else that directory's
/// parent. Nothing higher up is searched.
pub fn install_root(exe: &Path) -> PathBuf {
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));

    if exe_dir.join(SQL_DIR).is_dir() {
        return exe_dir.to_path_buf();
    }

    exe_dir.parent().unwrap_or(exe_dir).to_path_buf()
}

/// Read a resource given by a root-relative path
pub fn read_resource(root: &Path, relative: &str) -> CoreResult<String> {
    let full_path = root.join(relative);

    if !full_path.is_file() {
        return Err(CoreError::ResourceNotFound {
            path: full_path.display().to_string(),
        });
    }

    std::fs::read_to_string(&full_path).map_err(|e| CoreError::IoWithPath {
        path: full_path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "project_test.rs"]
mod tests;
