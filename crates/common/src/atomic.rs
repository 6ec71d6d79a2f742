//! All-or-nothing file writes.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, error, warn};

use crate::error::{PreviewError, PreviewResult};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Sibling temp path used while writing `path`:
/// `.<file name>.<pid>.<n>.tmp`, unique per process and per call.
fn temp_path_for(path: &Path) -> PathBuf {
    let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut name = std::ffi::OsString::from(".");
    if let Some(file_name) = path.file_name() {
        name.push(file_name);
    }
    name.push(format!(".{}.{n}.tmp", std::process::id()));
    path.with_file_name(name)
}

/// Write `bytes` to `path` atomically.
///
/// Data is first written and synced to a temporary file in the same
/// directory, then renamed over the target. On failure the temporary file
/// is removed and any existing file at `path` is left as it was. The temp
/// file is created exclusively, so a stray file with the same name is never
/// overwritten.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> PreviewResult<()> {
    let temp_path = temp_path_for(path);

    if let Err(e) = write_and_sync(&temp_path, bytes) {
        let _ = fs::remove_file(&temp_path);
        error!(path = %temp_path.display(), error = %e, "Failed to write temp file");
        return Err(PreviewError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        error!(
            from = %temp_path.display(),
            to = %path.display(),
            error = %e,
            "Failed to rename temp file to target"
        );
        PreviewError::Write {
            path: path.to_path_buf(),
            source: e,
        }
    })?;

    // The target is already replaced; a failed directory sync only weakens
    // durability across a crash.
    if let Err(e) = sync_parent_dir(path) {
        warn!(path = %path.display(), error = %e, "Failed to sync parent directory");
    }

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote file");
    Ok(())
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    File::open(parent)?.sync_all()
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
