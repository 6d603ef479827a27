use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;

/// Source folders every project gets, relative to the project root.
pub const PROJECT_DIRS: [&str; 7] = [
    "src/api",
    "src/assets",
    "src/navigation",
    "src/screens",
    "src/components",
    "src/theme",
    "src/utils",
];

/// Creates each directory under `root`, parents included. Existing
/// directories are fine.
pub fn create_dirs(root: &Path, dirs: &[&str]) -> Result<(), ScaffoldError> {
    for dir in dirs {
        let path = root.join(dir);
        fs::create_dir_all(&path).map_err(|source| ScaffoldError::Io {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "created directory");
    }
    Ok(())
}

/// Writes `content` to `root/relative`, replacing whatever was there.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf, ScaffoldError> {
    let path = root.join(relative);
    write_to(&path, content)?;
    Ok(path)
}

pub fn write_to(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    fs::write(path, content).map_err(|source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}
