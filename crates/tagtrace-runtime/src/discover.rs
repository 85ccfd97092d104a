//! Log-file discovery.
//!
//! A view target may be a file (used directly) or a directory, in which case
//! the most recently modified `.log` / `.jsonl` file under it wins.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extensions recognized as log files when scanning a directory.
const LOG_EXTENSIONS: [&str; 2] = ["log", "jsonl"];

pub fn is_log_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| LOG_EXTENSIONS.contains(&ext))
}

/// Most recently modified log file under `dir`, if any.
pub fn newest_log_file(dir: &Path) -> Result<Option<PathBuf>> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() || !is_log_file(entry.path()) {
            continue;
        }

        let Ok(metadata) = entry.metadata() else { continue };
        let Ok(modified) = metadata.modified() else { continue };

        if newest.as_ref().is_none_or(|(time, _)| modified > *time) {
            newest = Some((modified, entry.path().to_path_buf()));
        }
    }

    Ok(newest.map(|(_, path)| path))
}

/// Resolve a user-supplied view target to a concrete log file.
pub fn resolve_log_target(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        newest_log_file(path)?.ok_or_else(|| Error::NoLogFiles(path.to_path_buf()))
    } else if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(Error::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} does not exist", path.display()),
        )))
    }
}
