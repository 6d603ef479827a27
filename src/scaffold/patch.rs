//! Replacement of the generated Android `MainActivity.kt`.
//!
//! The file is overwritten wholesale: any edits already made to it are lost.

use std::path::{Path, PathBuf};

use crate::error::ScaffoldError;
use crate::scaffold::files::write_to;
use crate::templates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Patched(PathBuf),
    /// The initializer did not produce the file; nothing was written.
    Skipped(PathBuf),
}

pub fn main_activity_path(project_dir: &Path, project_name: &str) -> PathBuf {
    project_dir
        .join("android/app/src/main/java/com")
        .join(project_name.to_lowercase())
        .join("MainActivity.kt")
}

pub fn patch_main_activity(
    project_dir: &Path,
    project_name: &str,
) -> Result<PatchOutcome, ScaffoldError> {
    let path = main_activity_path(project_dir, project_name);
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no MainActivity.kt to patch");
        return Ok(PatchOutcome::Skipped(path));
    }

    write_to(&path, &templates::main_activity(project_name))?;
    Ok(PatchOutcome::Patched(path))
}
