//! POSIX filename manipulation
//!
//! All functions here operate on plain strings with `/` as the only separator.
//! They never touch the file system and never fail: every input, including the
//! empty string, has a defined result.

use super::{leading_separators, CollapseSeparators, SEPARATOR};

/// Result of [`dirname`] for a path without any separator
pub const CURRENT_DIR: &str = ".";
/// The root directory
pub const ROOT: &str = "/";
/// A later [`join`] segment starting with at least this many separators
/// discards everything joined before it
const RESET_RUN: usize = 2;

/// Whether a path is anchored at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    Absolute,
    Relative,
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathType::Absolute => write!(f, "absolute"),
            PathType::Relative => write!(f, "relative"),
        }
    }
}

/// Get the type of the path
pub fn pathtype(path: &str) -> PathType {
    if path.starts_with(SEPARATOR) {
        PathType::Absolute
    } else {
        PathType::Relative
    }
}

/// Get the directory part of the path
///
/// - `"kalle.erl"` gives `"."`
/// - `"/kalle.erl"` gives `"/"`
/// - `"/usr/src/kalle.erl"` gives `"/usr/src"`
///
/// The last component is removed together with the separators in front of it.
/// Separator runs in what is left are collapsed.
pub fn dirname(path: &str) -> String {
    let last = match path.rfind(SEPARATOR) {
        Some(i) => i,
        None => return CURRENT_DIR.to_string(),
    };
    let dir = path[..last].trim_end_matches(SEPARATOR);
    if dir.is_empty() {
        // only separators precede the last component
        return ROOT.to_string();
    }
    dir.collapse_separators()
}

/// Join the segments into one path
///
/// Segments are joined with a single separator, separator runs are collapsed
/// and the trailing separator is removed unless the result is `"/"`.
///
/// The first non-empty segment decides if the result is absolute. A later segment
/// starting with two or more separators discards everything before it,
/// so `join(["a", "///b/", "c/"])` is `"/b/c"`. Empty segments are skipped.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = String::new();
    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        if !acc.is_empty() {
            if leading_separators(segment) >= RESET_RUN {
                log::trace!("segment `{segment}` resets joined path `{acc}`");
                acc.clear();
            } else {
                acc.push(SEPARATOR);
            }
        }
        acc.push_str(segment);
    }
    acc.collapse_separators()
}

/// Join two segments. Same as `join([a, b])`
#[inline]
pub fn join2(a: &str, b: &str) -> String {
    join([a, b])
}

/// Get the last component of the path, ignoring trailing separators
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(i) => &trimmed[i + 1..],
        None => trimmed,
    }
}

/// Get the last component of the path with `ext` removed from the end
///
/// The basename is returned unchanged if it does not end with `ext`,
/// or if nothing would be left.
pub fn basename_ext<'a>(path: &'a str, ext: &str) -> &'a str {
    let base = basename(path);
    match base.strip_suffix(ext) {
        Some(stem) if !stem.is_empty() => stem,
        _ => base,
    }
}

/// Get the extension of the last component, including the dot.
/// Empty if there is none
pub fn extension(path: &str) -> &str {
    let name = last_component(path);
    match name.rfind('.') {
        Some(i) => &name[i..],
        None => "",
    }
}

/// Get the path with the [`extension`] removed
pub fn rootname(path: &str) -> &str {
    &path[..path.len() - extension(path).len()]
}

/// Get the path with `ext` removed if the path ends with it
pub fn rootname_ext<'a>(path: &'a str, ext: &str) -> &'a str {
    path.strip_suffix(ext).unwrap_or(path)
}

/// Split the path into its components
///
/// An absolute path has `"/"` as the first component. Empty components are dropped.
pub fn split(path: &str) -> Vec<&str> {
    let mut components = Vec::new();
    if pathtype(path) == PathType::Absolute {
        components.push(ROOT);
    }
    components.extend(path.split(SEPARATOR).filter(|c| !c.is_empty()));
    components
}

/// The text after the last separator, which may be empty
fn last_component(path: &str) -> &str {
    match path.rfind(SEPARATOR) {
        Some(i) => &path[i + 1..],
        None => path,
    }
}
