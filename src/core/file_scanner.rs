use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use walkdir::WalkDir;

/// Finds files under `dir` recursively, optionally filtered by extension.
///
/// Entries are visited in file-name order so the returned list (and with
/// it the merge order downstream) does not depend on directory iteration
/// order. A missing directory or an unreadable entry is an error.
pub fn find_files(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        bail!("could not find directory: {}.", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(wanted) = extension
            && entry.path().extension().and_then(|e| e.to_str()) != Some(wanted)
        {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}
