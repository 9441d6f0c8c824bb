//! Crash-safe file replacement

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use exitpass_domain::constants::TEMP_SUFFIX;

/// `<path>.<suffix>`, e.g. `students.json.bak`.
pub(crate) fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix);
    PathBuf::from(name)
}

/// Replace `path` with `bytes` so readers see either the old or new file.
///
/// Writes `<path>.tmp`, fsyncs it, optionally copies the current file to
/// `backup`, then renames the temp file over `path`.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8], backup: Option<&Path>) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = sibling_with_suffix(path, TEMP_SUFFIX);
    let result = write_and_swap(path, &tmp, bytes, backup);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_and_swap(path: &Path, tmp: &Path, bytes: &[u8], backup: Option<&Path>) -> io::Result<()> {
    {
        let mut file = File::create(tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Some(backup) = backup {
        if path.exists() {
            fs::copy(path, backup)?;
        }
    }

    fs::rename(tmp, path)?;
    sync_parent(path);
    Ok(())
}

#[cfg(unix)]
fn sync_parent(path: &Path) {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }
}

#[cfg(not(unix))]
fn sync_parent(_path: &Path) {}
