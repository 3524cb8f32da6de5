//! Resolution of file patterns to absolute file paths
//!
//! Each pattern is classified against the filesystem at resolution time:
//! a pattern naming an existing regular file is taken as-is, a pattern
//! naming an existing directory is expanded to the files it contains, and
//! everything else is treated as a glob expression. Expansion failures on
//! individual entries are absorbed so that resolution gathers whatever it
//! can; the only error is an empty overall result.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::glob;
use log::debug;
use walkdir::WalkDir;

use crate::error::ResolveError;

/// How a single pattern is expanded, decided by a stat of the literal path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PatternKind {
    /// Names an existing regular file
    File,
    /// Names an existing directory
    Directory,
    /// Anything else: nonexistent paths and special files fall through
    /// to glob matching
    Glob,
}

impl PatternKind {
    fn classify(pattern: &str) -> Self {
        match fs::metadata(pattern) {
            Ok(meta) if meta.is_file() => Self::File,
            Ok(meta) if meta.is_dir() => Self::Directory,
            _ => Self::Glob,
        }
    }
}

/// Accumulates resolved files, deduplicating by absolute path.
///
/// The first occurrence of a path wins its position; later occurrences
/// are silent no-ops.
#[derive(Debug, Default)]
struct FileSet {
    seen: HashSet<PathBuf>,
    files: Vec<PathBuf>,
}

impl FileSet {
    fn insert(&mut self, path: &Path) {
        // Best-effort: an unresolvable path keeps its supplied form as
        // the dedup key rather than failing the whole resolution.
        let abs = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if self.seen.insert(abs.clone()) {
            self.files.push(abs);
        }
    }
}

/// Resolve patterns (files, directories, globs) to a deduplicated list of
/// absolute file paths, preserving first-match order.
///
/// Empty pattern strings are skipped. Directories are expanded to their
/// immediate regular files, or to their whole subtree when `recursive` is
/// set. Returns [`ResolveError::NoMatches`] if nothing matched.
pub fn resolve_patterns(
    patterns: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>, ResolveError> {
    debug!(
        "resolving {} pattern(s), recursive: {}",
        patterns.len(),
        recursive
    );

    let mut set = FileSet::default();
    for pattern in patterns {
        if pattern.is_empty() {
            continue;
        }
        let kind = PatternKind::classify(pattern);
        debug!("pattern {pattern:?} classified as {kind:?}");
        match kind {
            PatternKind::File => set.insert(Path::new(pattern)),
            PatternKind::Directory => expand_dir(Path::new(pattern), recursive, &mut set),
            PatternKind::Glob => expand_glob(pattern, &mut set),
        }
    }

    if set.files.is_empty() {
        return Err(ResolveError::NoMatches {
            patterns: patterns.to_vec(),
        });
    }
    Ok(set.files)
}

/// Register the regular files under `dir`, sorted by file name for a
/// stable order. Unreadable entries are skipped.
fn expand_dir(dir: &Path, recursive: bool, set: &mut FileSet) {
    if recursive {
        let walk = WalkDir::new(dir).sort_by_file_name();
        for entry in walk.into_iter().filter_map(|e| e.ok()) {
            if entry.file_type().is_file() {
                set.insert(entry.path());
            }
        }
        return;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());
    for entry in entries {
        if entry.file_type().is_ok_and(|t| t.is_file()) {
            set.insert(&entry.path());
        }
    }
}

/// Register the regular files matching a glob expression. Directory
/// matches, unreadable matches, and invalid patterns contribute nothing.
fn expand_glob(pattern: &str, set: &mut FileSet) {
    let Ok(matches) = glob(pattern) else {
        debug!("invalid glob pattern {pattern:?}, ignored");
        return;
    };
    for path in matches.filter_map(|m| m.ok()) {
        if path.is_file() {
            set.insert(&path);
        }
    }
}
