//! Shared file-handling helpers, grounded on the teacher crate's
//! `src/util/mod.rs` (`open_file_r`, `create_file_a`, `sync_write`) but
//! trimmed to what a single-writer, single-file index needs.

use std::{ffi, fs, io::Write, path};

use crate::{err_at, Result};

/// Create a new file for writing, truncating any existing file at `path`.
pub fn create_file_w(file: &ffi::OsStr) -> Result<fs::File> {
    let os_file = path::Path::new(file);
    if let Some(parent) = os_file.parent() {
        if !parent.as_os_str().is_empty() {
            err_at!(IoOpen, fs::create_dir_all(parent), "create_dir_all {:?}", parent)?;
        }
    }
    err_at!(
        IoOpen,
        fs::OpenOptions::new().write(true).create(true).truncate(true).open(os_file),
        "create {:?}",
        file
    )
}

/// Open an existing file read-only.
pub fn open_file_r(file: &ffi::OsStr) -> Result<fs::File> {
    let os_file = path::Path::new(file);
    err_at!(IoOpen, fs::OpenOptions::new().read(true).open(os_file), "open {:?}", file)
}

/// Write `data` in full and fail loudly on a short write, matching the
/// teacher's `write_file!` macro contract.
pub fn write_all<W: Write>(w: &mut W, data: &[u8]) -> Result<()> {
    err_at!(IoWrite, w.write_all(data), "short write of {} bytes", data.len())
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
