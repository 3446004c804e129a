//! Filesystem helpers built on `cap-std` and `camino`.
//!
//! Exports are numbered `xctransfer-<N>.kml`; each run picks the next free
//! number in the output directory so earlier exports are never replaced.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs::OpenOptions;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// File name prefix shared by every export.
pub const OUTPUT_PREFIX: &str = "xctransfer-";
/// File name suffix shared by every export.
pub const OUTPUT_SUFFIX: &str = ".kml";

/// Open a directory using ambient authority.
pub fn open_ambient_dir(path: &Utf8Path) -> io::Result<fs_utf8::Dir> {
    fs_utf8::Dir::open_ambient_dir(path, ambient_authority())
}

/// Resolve an ambient directory for the given path and return the directory with the file name.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = open_ambient_dir(parent)?;
    Ok((dir, file_name))
}

/// Return whether a path exists and is a regular file using capability-based IO.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Name of the export numbered `index`.
pub fn output_file_name(index: u64) -> String {
    format!("{OUTPUT_PREFIX}{index}{OUTPUT_SUFFIX}")
}

/// Numeric suffix of an export file name.
///
/// Returns `None` when `name` is not an export at all, and `Some(0)` when it
/// matches the pattern but the suffix is not a number.
pub fn output_index(name: &str) -> Option<u64> {
    let suffix = name
        .strip_prefix(OUTPUT_PREFIX)?
        .strip_suffix(OUTPUT_SUFFIX)?;
    Some(suffix.parse().unwrap_or(0))
}

/// One more than the highest export number in `dir`, or 1 if there is none.
///
/// Entries whose names are not valid UTF-8 cannot match and are skipped.
pub fn next_output_index(dir: &Utf8Path) -> io::Result<u64> {
    let highest = open_ambient_dir(dir)?
        .entries()?
        .filter_map(Result::ok)
        .filter_map(|entry| entry.file_name().ok())
        .filter_map(|name| output_index(&name))
        .max()
        .unwrap_or(0);
    Ok(highest.saturating_add(1))
}

/// Path of the next export in `dir`.
pub fn next_output_path(dir: &Utf8Path) -> io::Result<Utf8PathBuf> {
    let index = next_output_index(dir)?;
    Ok(dir.join(output_file_name(index)))
}

/// Create `path` for writing, failing if it already exists.
pub fn create_new_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    let (dir, name) = open_dir_and_file(path)?;
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    dir.open_with(name.as_str(), &options)
}
