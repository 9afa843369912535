//! Built-in exclusion rules
//!
//! The scanner consults these tables to decide which directories to prune and
//! which files to skip, and the report lists them verbatim in its catalogue
//! section. Edit the tables below to change the defaults.

use std::collections::{BTreeMap, BTreeSet};

/// Directories that are never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    "__pycache__",
    ".git",
    "node_modules",
    "venv",
    "env",
    ".venv",
    ".env",
    "logs",
    "!backups",
];

/// Excluded file extensions grouped by category, leading dot included.
pub const DEFAULT_SKIP_EXTENSIONS: &[(&str, &[&str])] = &[
    (
        "Document Files",
        &[
            ".md", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".odt", ".ods",
            ".odp", ".rtf", ".txt", ".csv", ".tsv",
        ],
    ),
    (
        "Database Files",
        &[
            ".db", ".sqlite", ".sqlite3", ".db3", ".mdb", ".accdb", ".sql", ".frm", ".myd", ".myi",
        ],
    ),
    (
        "Image Files",
        &[
            ".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".tif", ".webp", ".svg", ".ico",
            ".psd", ".ai", ".eps", ".raw", ".heic", ".heif", ".indd", ".cr2", ".nef", ".arw",
            ".dng",
        ],
    ),
    (
        "Archive/Compressed Files",
        &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".xz"],
    ),
    (
        "Backup and Cache Files",
        &[".bak", ".tmp", ".swp", ".swo", "~"],
    ),
    (
        "Binary/Compiled Files",
        &[".pyc", ".pyo", ".pyd", ".so", ".dll", ".exe", ".class"],
    ),
    (
        "System and Config Files",
        &[".ini", ".cfg", ".conf", ".log", ".lock", ".lnk"],
    ),
];

/// File names that are always skipped, matched exactly.
pub const RESERVED_FILE_NAMES: &[&str] = &["__init__.py", "desktop.ini"];

/// Prefix marking hidden files.
pub const HIDDEN_PREFIX: char = '.';

/// Note appended to the exclusion catalogue.
pub const HIDDEN_FILES_NOTE: &str = "*Note: The scan also excludes hidden files (names starting with a `.period` ), `__init__.py`, and `desktop.ini` files.*";

/// Extension of a file name, without the dot.
///
/// The extension starts after the last `.`, but only when something other
/// than dots precedes it, so `.bashrc` and `...` have none. A trailing dot
/// yields an empty extension.
pub fn file_extension(name: &str) -> Option<&str> {
    let dot = name.rfind('.')?;
    if name[..dot].chars().all(|c| c == '.') {
        return None;
    }
    Some(&name[dot + 1..])
}

/// Directory and extension exclusion rules used by a scan.
#[derive(Debug, Clone)]
pub struct ExclusionConfig {
    skip_dirs: BTreeSet<String>,
    /// Category name -> extensions (with leading dot)
    skip_extensions: BTreeMap<String, BTreeSet<String>>,
    /// Flattened view of `skip_extensions` for lookups
    extension_lookup: BTreeSet<String>,
}

impl ExclusionConfig {
    /// Configuration with no exclusions at all.
    ///
    /// Hidden files and the reserved file names are still skipped.
    pub fn empty() -> Self {
        Self {
            skip_dirs: BTreeSet::new(),
            skip_extensions: BTreeMap::new(),
            extension_lookup: BTreeSet::new(),
        }
    }

    /// Add a directory name to prune.
    pub fn with_skip_dir(mut self, name: impl Into<String>) -> Self {
        self.skip_dirs.insert(name.into());
        self
    }

    /// Add an excluded extension under `category`.
    ///
    /// The extension is stored lowercase; a leading dot is added when missing.
    pub fn with_skip_extension(mut self, category: impl Into<String>, ext: &str) -> Self {
        let ext = ext.to_lowercase();
        let ext = if ext.starts_with('.') || ext == "~" {
            ext
        } else {
            format!(".{}", ext)
        };
        self.extension_lookup.insert(ext.clone());
        self.skip_extensions
            .entry(category.into())
            .or_default()
            .insert(ext);
        self
    }

    /// Excluded directory names, sorted.
    pub fn skip_dirs(&self) -> impl Iterator<Item = &str> {
        self.skip_dirs.iter().map(String::as_str)
    }

    /// Excluded extension categories, sorted by name, each with its sorted
    /// extensions.
    pub fn extension_categories(&self) -> impl Iterator<Item = (&str, Vec<&str>)> {
        self.skip_extensions
            .iter()
            .map(|(category, exts)| (category.as_str(), exts.iter().map(String::as_str).collect()))
    }

    /// Whether a directory with this name is pruned.
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.contains(name)
    }

    /// Whether an extension (without dot, any case) is excluded.
    pub fn is_skipped_extension(&self, ext: &str) -> bool {
        self.extension_lookup.contains(&format!(".{}", ext.to_lowercase()))
    }

    /// Whether a file with this name qualifies for counting.
    pub fn accepts_file_name(&self, name: &str) -> bool {
        if name.starts_with(HIDDEN_PREFIX) || RESERVED_FILE_NAMES.contains(&name) {
            return false;
        }
        match file_extension(name) {
            Some(ext) => !self.is_skipped_extension(ext),
            None => true,
        }
    }
}

impl Default for ExclusionConfig {
    fn default() -> Self {
        let mut config = Self::empty();
        for dir in DEFAULT_SKIP_DIRS {
            config = config.with_skip_dir(*dir);
        }
        for (category, exts) in DEFAULT_SKIP_EXTENSIONS {
            for ext in *exts {
                config = config.with_skip_extension(*category, ext);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("main.rs"), Some("rs"));
        assert_eq!(file_extension("archive.tar.gz"), Some("gz"));
        assert_eq!(file_extension("Makefile"), None);
        assert_eq!(file_extension(".bashrc"), None);
        assert_eq!(file_extension("..."), None);
        assert_eq!(file_extension("name."), Some(""));
        assert_eq!(file_extension("..hidden.py"), Some("py"));
    }

    #[test]
    fn test_default_skips_extensions_case_insensitively() {
        let config = ExclusionConfig::default();
        assert!(!config.accepts_file_name("README.md"));
        assert!(!config.accepts_file_name("README.MD"));
        assert!(!config.accepts_file_name("photo.JpEg"));
        assert!(config.accepts_file_name("main.rs"));
        assert!(config.accepts_file_name("Makefile"));
    }

    #[test]
    fn test_hidden_and_reserved_names() {
        let config = ExclusionConfig::default();
        assert!(!config.accepts_file_name(".gitignore"));
        assert!(!config.accepts_file_name("__init__.py"));
        assert!(!config.accepts_file_name("desktop.ini"));
        // Reserved names are matched exactly
        assert!(config.accepts_file_name("__INIT__.py"));
    }

    #[test]
    fn test_empty_config_still_skips_hidden() {
        let config = ExclusionConfig::empty();
        assert!(config.accepts_file_name("notes.md"));
        assert!(!config.accepts_file_name(".env"));
        assert!(!config.is_skipped_dir("node_modules"));
    }

    #[test]
    fn test_default_skip_dirs() {
        let config = ExclusionConfig::default();
        assert!(config.is_skipped_dir("node_modules"));
        assert!(config.is_skipped_dir("!backups"));
        assert!(!config.is_skipped_dir("src"));
        let dirs: Vec<_> = config.skip_dirs().collect();
        assert_eq!(dirs.first(), Some(&"!backups"));
    }

    #[test]
    fn test_categories_sorted() {
        let config = ExclusionConfig::default();
        let categories: Vec<_> = config.extension_categories().map(|(c, _)| c).collect();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(categories.len(), DEFAULT_SKIP_EXTENSIONS.len());

        let (_, archives) = config
            .extension_categories()
            .find(|(c, _)| *c == "Archive/Compressed Files")
            .unwrap();
        assert_eq!(archives, vec![".7z", ".bz2", ".gz", ".rar", ".tar", ".xz", ".zip"]);
    }

    #[test]
    fn test_with_skip_extension_normalizes() {
        let config = ExclusionConfig::empty().with_skip_extension("Generated", "RS");
        assert!(config.is_skipped_extension("rs"));
        assert!(!config.accepts_file_name("lib.Rs"));
    }
}
