//! Scanner - walks the tree and builds file records

use std::path::Path;

use ignore::{DirEntry, WalkBuilder};
use tracing::debug;

use crate::error::{Error, Result};
use crate::exclusions::{ExclusionConfig, file_extension};

use super::lines::count_lines;
use super::record::FileRecord;

/// Walks a directory tree and counts lines of every qualifying file.
pub struct Scanner {
    config: ExclusionConfig,
}

impl Scanner {
    pub fn new(config: ExclusionConfig) -> Self {
        Self { config }
    }

    /// Scan `root` and return its records sorted by path (case-insensitive).
    pub fn scan(&self, root: &Path) -> Result<Vec<FileRecord>> {
        if !root.is_dir() {
            return Err(Error::NotADirectory(root.to_path_buf()));
        }

        let prune = self.config.clone();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned_dir(entry, &prune))
            .build();

        let mut records = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.depth() == 0 || !is_file_like(&entry) {
                continue;
            }
            if let Some(record) = self.record_for(root, &entry) {
                records.push(record);
            }
        }

        records.sort_by(|a, b| a.cmp_path(b));
        debug!(root = %root.display(), files = records.len(), "scan finished");
        Ok(records)
    }

    fn record_for(&self, root: &Path, entry: &DirEntry) -> Option<FileRecord> {
        let name = entry.file_name().to_string_lossy();
        if !self.config.accepts_file_name(&name) {
            return None;
        }

        let path = entry.path();
        // Follows symlinks; dangling links are dropped here
        let size = match std::fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "size unavailable, file skipped");
                return None;
            }
        };

        Some(FileRecord::new(
            relative_path(root, path),
            count_lines(path),
            size,
            file_extension(&name),
        ))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ExclusionConfig::default())
    }
}

/// Excluded directories below the root are never entered.
fn is_pruned_dir(entry: &DirEntry, config: &ExclusionConfig) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
        return false;
    }
    let pruned = config.is_skipped_dir(&entry.file_name().to_string_lossy());
    if pruned {
        debug!(path = %entry.path().display(), "pruned excluded directory");
    }
    pruned
}

/// Regular files and symlinks that do not resolve to a directory.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

/// Path of `path` under `root`, joined with `/`.
fn relative_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
