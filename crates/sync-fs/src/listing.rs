//! Recursive file listing with extension and glob filtering
//!
//! Produces one [`FileRecord`] per regular file under an entry directory.
//! Keys are paths relative to the entry root with `/` separators, so the
//! same tree yields the same keys on every platform.

use globset::{Glob, GlobSet, GlobSetBuilder};
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fingerprint::mtime_epoch;
use crate::{Error, Result};

/// One discovered file, with the cheap part of its fingerprint.
///
/// The content hash is deliberately absent: it is computed on demand during
/// change detection, so unchanged files are never read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the entry root, `/`-separated; unique within a listing
    pub key: String,
    /// Absolute filesystem path
    pub path: PathBuf,
    /// File size in bytes
    pub size: u64,
    /// Modification time in epoch seconds
    pub mtime: i64,
}

/// Comparator for caller-supplied listing order.
pub type FileComparator = dyn Fn(&FileRecord, &FileRecord) -> Ordering + Send + Sync;

/// Options controlling which files a listing yields, and in what order.
#[derive(Default)]
pub struct ListingOptions {
    /// Extensions to keep (matched case-insensitively, without the dot).
    /// Empty means all files.
    pub extensions: Vec<String>,
    /// Glob patterns the relative key must match. Empty means all keys.
    pub include: Vec<String>,
    /// Glob patterns that exclude a key even when included.
    pub exclude: Vec<String>,
    /// Custom ordering; defaults to lexicographic by key.
    pub order: Option<Box<FileComparator>>,
}

impl ListingOptions {
    /// Keep only files with one of the given extensions.
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// Restrict the listing to keys matching the given glob patterns.
    pub fn with_include(mut self, include: Vec<String>) -> Self {
        self.include = include;
        self
    }

    /// Exclude keys matching the given glob patterns.
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }
}

/// List all regular files under `entry`, filtered and ordered per `options`.
///
/// The walk is recursive and follows directory symlinks. Hidden files are
/// included. Directories never produce records. Keys are unique within one
/// listing because each regular file has exactly one relative path.
///
/// # Errors
///
/// Returns an error if `entry` is missing or not a directory, if a glob
/// pattern is invalid, or if a directory or file metadata cannot be read.
pub fn list_files(entry: &Path, options: &ListingOptions) -> Result<Vec<FileRecord>> {
    let metadata = fs::metadata(entry).map_err(|e| Error::io(entry, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: entry.to_path_buf(),
        });
    }

    let include = build_globset(&options.include)?;
    let exclude = build_globset(&options.exclude)?;

    let mut files = Vec::new();
    walk(entry, entry, options, include.as_ref(), exclude.as_ref(), &mut files)?;

    match &options.order {
        Some(compare) => files.sort_by(|a, b| compare(a, b)),
        None => files.sort_by(|a, b| a.key.cmp(&b.key)),
    }

    tracing::debug!(entry = %entry.display(), count = files.len(), "listing complete");
    Ok(files)
}

fn walk(
    root: &Path,
    dir: &Path,
    options: &ListingOptions,
    include: Option<&GlobSet>,
    exclude: Option<&GlobSet>,
    files: &mut Vec<FileRecord>,
) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| Error::io(&path, e))?;

        if metadata.is_dir() {
            walk(root, &path, options, include, exclude, files)?;
            continue;
        }
        if !metadata.is_file() {
            continue;
        }

        let key = relative_key(root, &path);
        if !extension_matches(&path, &options.extensions) {
            continue;
        }
        if let Some(include) = include
            && !include.is_match(&key)
        {
            continue;
        }
        if let Some(exclude) = exclude
            && exclude.is_match(&key)
        {
            continue;
        }

        let mtime = mtime_epoch(&metadata).map_err(|e| Error::io(&path, e))?;
        files.push(FileRecord {
            key,
            path,
            size: metadata.len(),
            mtime,
        });
    }
    Ok(())
}

/// Relative path from `root`, joined with `/` regardless of platform.
fn relative_key(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn extension_matches(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

fn build_globset(patterns: &[String]) -> Result<Option<GlobSet>> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| Error::Pattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    let set = builder.build().map_err(|e| Error::Pattern {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })?;
    Ok(Some(set))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn tree(files: &[(&str, &str)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (rel, content) in files {
            let path = dir.path().join(rel);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, content).unwrap();
        }
        dir
    }

    fn keys(files: &[FileRecord]) -> Vec<&str> {
        files.iter().map(|f| f.key.as_str()).collect()
    }

    #[test]
    fn lists_files_recursively_with_relative_keys() {
        let dir = tree(&[("a.txt", "a"), ("sub/b.txt", "bb"), ("sub/deep/c.md", "ccc")]);
        let files = list_files(dir.path(), &ListingOptions::default()).unwrap();
        assert_eq!(keys(&files), vec!["a.txt", "sub/b.txt", "sub/deep/c.md"]);
        assert_eq!(files[1].size, 2);
    }

    #[test]
    fn default_order_is_lexicographic_by_key() {
        let dir = tree(&[("z.txt", ""), ("a.txt", ""), ("m/b.txt", "")]);
        let files = list_files(dir.path(), &ListingOptions::default()).unwrap();
        assert_eq!(keys(&files), vec!["a.txt", "m/b.txt", "z.txt"]);
    }

    #[test]
    fn custom_order_is_respected() {
        let dir = tree(&[("a.txt", "x"), ("b.txt", "xx"), ("c.txt", "xxx")]);
        let mut options = ListingOptions::default();
        options.order = Some(Box::new(|a, b| b.size.cmp(&a.size)));
        let files = list_files(dir.path(), &options).unwrap();
        assert_eq!(keys(&files), vec!["c.txt", "b.txt", "a.txt"]);
    }

    #[rstest]
    #[case(vec!["md".to_string()], vec!["notes.md"])]
    #[case(vec![".md".to_string()], vec!["notes.md"])]
    #[case(vec!["MD".to_string()], vec!["notes.md"])]
    #[case(vec![], vec!["data.bin", "notes.md"])]
    fn extension_filter(#[case] extensions: Vec<String>, #[case] expected: Vec<&str>) {
        let dir = tree(&[("notes.md", ""), ("data.bin", "")]);
        let options = ListingOptions::default().with_extensions(extensions);
        let files = list_files(dir.path(), &options).unwrap();
        assert_eq!(keys(&files), expected);
    }

    #[test]
    fn include_and_exclude_globs() {
        let dir = tree(&[("src/a.rs", ""), ("src/b.rs", ""), ("docs/c.rs", "")]);
        let options = ListingOptions::default()
            .with_include(vec!["src/**".to_string()])
            .with_exclude(vec!["**/b.rs".to_string()]);
        let files = list_files(dir.path(), &options).unwrap();
        assert_eq!(keys(&files), vec!["src/a.rs"]);
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let dir = tree(&[("a.txt", "")]);
        let options = ListingOptions::default().with_include(vec!["[".to_string()]);
        let err = list_files(dir.path(), &options).unwrap_err();
        assert!(matches!(err, Error::Pattern { .. }));
    }

    #[test]
    fn empty_directory_yields_empty_listing() {
        let dir = tempfile::tempdir().unwrap();
        let files = list_files(dir.path(), &ListingOptions::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_entry_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(list_files(&missing, &ListingOptions::default()).is_err());
    }

    #[test]
    fn file_entry_is_not_a_directory_error() {
        let dir = tree(&[("a.txt", "")]);
        let err = list_files(&dir.path().join("a.txt"), &ListingOptions::default()).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }
}
