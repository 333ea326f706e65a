//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling temp path: `report.csv` -> `report.csv.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a temporary file next to the target, then
/// renamed over it, so a reader never sees a half-written export.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path(path);

    fs::write(&temp_path, content)?;

    // Atomic on POSIX systems
    fs::rename(&temp_path, path)?;

    Ok(())
}
