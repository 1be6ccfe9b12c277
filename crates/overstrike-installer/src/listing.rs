//! Archive listings
//!
//! An [`ArchiveListing`] is the flat, ordered list of paths an unpacking step
//! produced for one candidate archive. Entries are kept as received, and a
//! `/`-separated copy of each is used for matching and root stripping so that
//! listings produced on Windows and elsewhere behave the same.

use serde::{Deserialize, Serialize};

/// Canonical separator used by every path in a listing
pub const SEPARATOR: char = '/';

/// Ordered file listing of an extracted archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ArchiveListing {
    files: Vec<String>,
    normalized: Vec<String>,
}

impl ArchiveListing {
    /// Build a listing in the archive's order
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files: Vec<String> = files.into_iter().map(|f| f.as_ref().to_string()).collect();
        let normalized = files.iter().map(|f| normalize(f)).collect();
        Self { files, normalized }
    }

    /// Parse a newline separated listing, skipping blank lines
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(|line| line.trim_end_matches('\r'))
                .filter(|line| !line.trim().is_empty()),
        )
    }

    /// Entries exactly as the unpacking step reported them
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Normalized entries
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.normalized.iter().map(String::as_str)
    }

    /// Normalized entries that name files, skipping directory markers
    pub fn file_entries(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|path| !is_directory_marker(path))
    }

    /// File entries as `(raw, normalized)` pairs
    pub fn file_entries_with_raw(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files
            .iter()
            .zip(&self.normalized)
            .map(|(raw, normalized)| (raw.as_str(), normalized.as_str()))
            .filter(|(_, normalized)| !is_directory_marker(normalized))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl From<Vec<String>> for ArchiveListing {
    fn from(files: Vec<String>) -> Self {
        Self::new(files)
    }
}

impl From<ArchiveListing> for Vec<String> {
    fn from(listing: ArchiveListing) -> Self {
        listing.files
    }
}

impl<S: AsRef<str>> FromIterator<S> for ArchiveListing {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Replace backslashes with the canonical separator
pub fn normalize(path: &str) -> String {
    path.replace('\\', "/")
}

/// Directory markers are entries ending in the separator
pub fn is_directory_marker(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Last path component; a trailing separator is ignored
pub fn base_name(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Containing directory, `""` for top-level entries and `"/"` for entries
/// directly under the filesystem root
pub fn parent_dir(path: &str) -> &str {
    let trimmed = path.trim_end_matches(SEPARATOR);
    match trimmed.rfind(SEPARATOR) {
        Some(0) => &trimmed[..1],
        Some(idx) => &trimmed[..idx],
        None => "",
    }
}

/// Extension of the base name including the leading dot.
///
/// Dot files such as `.gitignore` have no extension.
pub fn extension(path: &str) -> Option<&str> {
    let name = base_name(path);
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx..]),
    }
}

/// Path of `path` relative to `root`, or `None` when it lies outside of it
pub fn relative_to<'a>(path: &'a str, root: &str) -> Option<&'a str> {
    if root.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(root)?;
    if root.ends_with(SEPARATOR) {
        Some(rest)
    } else {
        rest.strip_prefix(SEPARATOR)
    }
}

/// A destination is safe when it is relative and cannot climb out of the
/// deployment directory
pub fn is_safe_destination(destination: &str) -> bool {
    !destination.is_empty()
        && !destination.starts_with(SEPARATOR)
        && !destination.split(SEPARATOR).any(|component| component == "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_backslashes_but_keeps_raw_entries() {
        let listing = ArchiveListing::new(["Mods\\suit\\a.suit", "Mods\\", "readme.txt"]);
        let normalized: Vec<_> = listing.iter().collect();
        assert_eq!(normalized, vec!["Mods/suit/a.suit", "Mods/", "readme.txt"]);
        assert_eq!(listing.files(), &["Mods\\suit\\a.suit", "Mods\\", "readme.txt"]);

        let files: Vec<_> = listing.file_entries_with_raw().collect();
        assert_eq!(files, vec![("Mods\\suit\\a.suit", "Mods/suit/a.suit"), ("readme.txt", "readme.txt")]);
    }

    #[test]
    fn test_from_lines_skips_blank_lines() {
        let listing = ArchiveListing::from_lines("a/b.suit\r\n\n   \nc.txt\n");
        assert_eq!(listing.files(), &["a/b.suit", "c.txt"]);
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(base_name("X/overstrike.exe"), "overstrike.exe");
        assert_eq!(base_name("X/sub/"), "sub");
        assert_eq!(parent_dir("X/sub/file.bin"), "X/sub");
        assert_eq!(parent_dir("file.bin"), "");
        assert_eq!(parent_dir("/file.bin"), "/");
        assert_eq!(extension("a/b.SMPCMOD"), Some(".SMPCMOD"));
        assert_eq!(extension("a/.hidden"), None);
        assert_eq!(extension("a/noext"), None);
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(relative_to("Mods/foo.suit", "Mods"), Some("foo.suit"));
        assert_eq!(relative_to("Mods/sub/foo.suit", "Mods"), Some("sub/foo.suit"));
        assert_eq!(relative_to("ModsExtra/foo.suit", "Mods"), None);
        assert_eq!(relative_to("extra/readme.txt", "Mods"), None);
        assert_eq!(relative_to("foo.suit", ""), Some("foo.suit"));
        assert_eq!(relative_to("/foo.suit", "/"), Some("foo.suit"));
    }

    #[test]
    fn test_safe_destination() {
        assert!(is_safe_destination("foo.suit"));
        assert!(is_safe_destination("sub/foo.suit"));
        assert!(!is_safe_destination("/foo.suit"));
        assert!(!is_safe_destination("../foo.suit"));
        assert!(!is_safe_destination("a/../../foo.suit"));
        assert!(!is_safe_destination(""));
    }

    #[test]
    fn test_serde_as_plain_array() {
        let listing: ArchiveListing = serde_json::from_str(r#"["a\\b.suit","c"]"#).unwrap();
        assert_eq!(listing.iter().collect::<Vec<_>>(), vec!["a/b.suit", "c"]);
        assert_eq!(serde_json::to_string(&listing).unwrap(), r#"["a\\b.suit","c"]"#);
    }
}
