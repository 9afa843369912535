//! Per-file scan result

use std::cmp::Ordering;

/// Extension shown for files without one.
pub const NO_EXTENSION: &str = "none";

/// One counted file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    path: String,
    lines: usize,
    size_kb: f64,
    ext: String,
}

impl FileRecord {
    /// Build a record. `ext` is the raw extension without its dot, if any.
    pub fn new(path: impl Into<String>, lines: usize, size_bytes: u64, ext: Option<&str>) -> Self {
        Self {
            path: path.into(),
            lines,
            size_kb: size_bytes as f64 / 1024.0,
            ext: ext
                .map(str::to_lowercase)
                .unwrap_or_else(|| NO_EXTENSION.to_string()),
        }
    }

    /// Path relative to the scan root, `/`-separated.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn size_kb(&self) -> f64 {
        self.size_kb
    }

    /// Lowercase extension, or `"none"`.
    pub fn ext(&self) -> &str {
        &self.ext
    }

    /// Compare paths case-insensitively, falling back to the exact path.
    pub fn cmp_path(&self, other: &Self) -> Ordering {
        self.path
            .to_lowercase()
            .cmp(&other.path.to_lowercase())
            .then_with(|| self.path.cmp(&other.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_normalized() {
        let record = FileRecord::new("src/Main.RS", 3, 2048, Some("RS"));
        assert_eq!(record.ext(), "rs");
        assert_eq!(record.path(), "src/Main.RS");
        assert_eq!(record.size_kb(), 2.0);
    }

    #[test]
    fn test_missing_extension_uses_sentinel() {
        let record = FileRecord::new("Makefile", 1, 10, None);
        assert_eq!(record.ext(), NO_EXTENSION);
    }

    #[test]
    fn test_cmp_path_ignores_case() {
        let a = FileRecord::new("B.py", 1, 1, Some("py"));
        let b = FileRecord::new("a.py", 1, 1, Some("py"));
        assert_eq!(a.cmp_path(&b), Ordering::Greater);
        let upper = FileRecord::new("A.py", 1, 1, Some("py"));
        assert_eq!(upper.cmp_path(&b), Ordering::Less);
    }
}
