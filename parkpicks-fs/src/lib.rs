//! Filesystem helpers for reading feed snapshots and request files.
//!
//! Paths are UTF-8 throughout (`camino`), and directory access goes through
//! `cap-std` so a feed directory handle can only reach files beneath it.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open a directory using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error, including when `path` is not a
/// directory.
pub fn open_utf8_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    fs_utf8::Dir::open_ambient_dir(path, ambient_authority())
}

/// Open `name` inside `dir`, returning `None` when it does not exist.
///
/// # Errors
/// Propagates every I/O error other than [`io::ErrorKind::NotFound`].
pub fn open_optional_in(dir: &fs_utf8::Dir, name: &str) -> io::Result<Option<fs_utf8::File>> {
    match dir.open(name) {
        Ok(file) => Ok(Some(file)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Resolve an ambient directory for the given path and return the directory
/// with the file name.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("path should include a file name"))?
        .to_owned();
    let dir = open_utf8_dir(parent)?;
    Ok((dir, file_name))
}

/// Return whether an existing path is a regular file.
///
/// # Errors
/// Propagates I/O errors, including [`io::ErrorKind::NotFound`] when the
/// path does not exist.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}
